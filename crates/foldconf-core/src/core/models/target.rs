use super::region::RegionLayout;

/// An experimental structure that covers part of the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceStructure {
    pub pdb_id: String,
    pub note: String, // e.g. "Residues 157-165 only (peptide in HLA-A2 complex)"
}

impl ReferenceStructure {
    pub fn new(pdb_id: &str, note: &str) -> Self {
        Self {
            pdb_id: pdb_id.to_string(),
            note: note.to_string(),
        }
    }
}

/// Identity of the analysed protein, used for report headings and narrative sections.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetProfile {
    pub name: String,
    pub gene: String,
    pub uniprot: String,
    pub method: String,
    pub prediction_date: String,
    pub reference_structures: Vec<ReferenceStructure>,
    pub layout: RegionLayout,
}

impl TargetProfile {
    /// `"NY-ESO-1 (CTAG1B)"`, or just the name when no gene symbol is set.
    pub fn display_name(&self) -> String {
        if self.gene.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.gene)
        }
    }

    pub fn chain_length(&self) -> isize {
        self.layout.c_terminal().end
    }
}

impl Default for TargetProfile {
    fn default() -> Self {
        Self {
            name: "NY-ESO-1".to_string(),
            gene: "CTAG1B".to_string(),
            uniprot: "P78358".to_string(),
            method: "AlphaFold3".to_string(),
            prediction_date: "November 26, 2025".to_string(),
            reference_structures: vec![
                ReferenceStructure::new("1S9W", "Residues 157-165 only (peptide in HLA-A2 complex)"),
                ReferenceStructure::new(
                    "1S9Y",
                    "Residues 157-165 variant (peptide in HLA-A2 complex)",
                ),
            ],
            layout: RegionLayout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_describes_ny_eso_1() {
        let profile = TargetProfile::default();
        assert_eq!(profile.display_name(), "NY-ESO-1 (CTAG1B)");
        assert_eq!(profile.uniprot, "P78358");
        assert_eq!(profile.chain_length(), 180);
        assert_eq!(profile.reference_structures[0].pdb_id, "1S9W");
    }

    #[test]
    fn display_name_omits_empty_gene() {
        let profile = TargetProfile {
            gene: String::new(),
            ..Default::default()
        };
        assert_eq!(profile.display_name(), "NY-ESO-1");
    }
}
