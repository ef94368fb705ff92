use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
    #[error("Region '{name}' has start {start} after end {end}")]
    InvertedBounds {
        name: String,
        start: isize,
        end: isize,
    },
    #[error("Regions '{first}' and '{second}' overlap or are out of order")]
    Overlap { first: String, second: String },
    #[error("Expected exactly 3 regions, got {0}")]
    WrongCount(usize),
}

/// A named closed interval of residue indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub start: isize,
    pub end: isize,
}

impl Region {
    pub fn new(name: &str, start: isize, end: isize) -> Self {
        Self {
            name: name.to_string(),
            start,
            end,
        }
    }

    #[inline]
    pub fn contains(&self, index: isize) -> bool {
        self.start <= index && index <= self.end
    }

    pub fn bounds(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }

    fn check_bounds(&self) -> Result<(), RegionError> {
        if self.start > self.end {
            return Err(RegionError::InvertedBounds {
                name: self.name.clone(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-{})", self.name, self.start, self.end)
    }
}

/// Three disjoint regions spanning the chain, plus an epitope window analysed on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionLayout {
    regions: [Region; 3],
    epitope: Region,
}

impl RegionLayout {
    pub fn new(regions: Vec<Region>, epitope: Region) -> Result<Self, RegionError> {
        let regions: [Region; 3] = regions
            .try_into()
            .map_err(|v: Vec<Region>| RegionError::WrongCount(v.len()))?;

        for region in regions.iter().chain(std::iter::once(&epitope)) {
            region.check_bounds()?;
        }
        for pair in regions.windows(2) {
            if pair[0].end >= pair[1].start {
                return Err(RegionError::Overlap {
                    first: pair[0].name.clone(),
                    second: pair[1].name.clone(),
                });
            }
        }

        Ok(Self { regions, epitope })
    }

    pub fn regions(&self) -> &[Region; 3] {
        &self.regions
    }

    pub fn n_terminal(&self) -> &Region {
        &self.regions[0]
    }

    pub fn core_domain(&self) -> &Region {
        &self.regions[1]
    }

    pub fn c_terminal(&self) -> &Region {
        &self.regions[2]
    }

    pub fn epitope(&self) -> &Region {
        &self.epitope
    }
}

impl Default for RegionLayout {
    fn default() -> Self {
        Self {
            regions: [
                Region::new("N-terminal glycine-rich", 1, 81),
                Region::new("Pcc-1 domain", 82, 168),
                Region::new("C-terminal region", 169, 180),
            ],
            epitope: Region::new("SLLMWITQC", 157, 165),
        }
    }
}
