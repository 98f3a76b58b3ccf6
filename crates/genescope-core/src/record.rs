use serde::{Deserialize, Serialize};

/// Rendered in place of an absent or empty field value.
pub const PLACEHOLDER: &str = "N/A";

/// The catalogue columns, in fixed export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    GeneName,
    Variant,
    Disease,
    Function,
    AdMechanism,
    OxidativeStress,
    Angiogenesis,
    NeuralSurvival,
    TeRelevance,
    ScaffoldStrategy,
    CellType,
    GrowthFactors,
    BiomaterialSuggestion,
    RegenerationOutcome,
}

impl RecordField {
    pub const ALL: [RecordField; 14] = [
        RecordField::GeneName,
        RecordField::Variant,
        RecordField::Disease,
        RecordField::Function,
        RecordField::AdMechanism,
        RecordField::OxidativeStress,
        RecordField::Angiogenesis,
        RecordField::NeuralSurvival,
        RecordField::TeRelevance,
        RecordField::ScaffoldStrategy,
        RecordField::CellType,
        RecordField::GrowthFactors,
        RecordField::BiomaterialSuggestion,
        RecordField::RegenerationOutcome,
    ];

    /// Key used in the record file.
    pub fn key(&self) -> &'static str {
        match self {
            RecordField::GeneName => "gene_name",
            RecordField::Variant => "variant",
            RecordField::Disease => "disease",
            RecordField::Function => "function",
            RecordField::AdMechanism => "ad_mechanism",
            RecordField::OxidativeStress => "oxidative_stress",
            RecordField::Angiogenesis => "angiogenesis",
            RecordField::NeuralSurvival => "neural_survival",
            RecordField::TeRelevance => "te_relevance",
            RecordField::ScaffoldStrategy => "scaffold_strategy",
            RecordField::CellType => "cell_type",
            RecordField::GrowthFactors => "growth_factors",
            RecordField::BiomaterialSuggestion => "biomaterial_suggestion",
            RecordField::RegenerationOutcome => "regeneration_outcome",
        }
    }

    /// Human-readable column label.
    pub fn label(&self) -> &'static str {
        match self {
            RecordField::GeneName => "Gene Name",
            RecordField::Variant => "Variant",
            RecordField::Disease => "Disease",
            RecordField::Function => "Function",
            RecordField::AdMechanism => "AD Mechanism",
            RecordField::OxidativeStress => "Oxidative Stress",
            RecordField::Angiogenesis => "Angiogenesis",
            RecordField::NeuralSurvival => "Neural Survival",
            RecordField::TeRelevance => "TE Relevance",
            RecordField::ScaffoldStrategy => "Scaffold Strategy",
            RecordField::CellType => "Cell Type",
            RecordField::GrowthFactors => "Growth Factors",
            RecordField::BiomaterialSuggestion => "Biomaterial Suggestion",
            RecordField::RegenerationOutcome => "Regeneration Outcome",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the gene catalogue.
///
/// Every field is optional text. `None` (absent) and `Some("")` are kept
/// distinct, though both render as [`PLACEHOLDER`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneRecord {
    pub gene_name: Option<String>,
    pub variant: Option<String>,
    pub disease: Option<String>,
    pub function: Option<String>,
    pub ad_mechanism: Option<String>,
    pub oxidative_stress: Option<String>,
    pub angiogenesis: Option<String>,
    pub neural_survival: Option<String>,
    pub te_relevance: Option<String>,
    pub scaffold_strategy: Option<String>,
    pub cell_type: Option<String>,
    pub growth_factors: Option<String>,
    pub biomaterial_suggestion: Option<String>,
    pub regeneration_outcome: Option<String>,
}

impl GeneRecord {
    pub fn get(&self, field: RecordField) -> Option<&str> {
        let value = match field {
            RecordField::GeneName => &self.gene_name,
            RecordField::Variant => &self.variant,
            RecordField::Disease => &self.disease,
            RecordField::Function => &self.function,
            RecordField::AdMechanism => &self.ad_mechanism,
            RecordField::OxidativeStress => &self.oxidative_stress,
            RecordField::Angiogenesis => &self.angiogenesis,
            RecordField::NeuralSurvival => &self.neural_survival,
            RecordField::TeRelevance => &self.te_relevance,
            RecordField::ScaffoldStrategy => &self.scaffold_strategy,
            RecordField::CellType => &self.cell_type,
            RecordField::GrowthFactors => &self.growth_factors,
            RecordField::BiomaterialSuggestion => &self.biomaterial_suggestion,
            RecordField::RegenerationOutcome => &self.regeneration_outcome,
        };
        value.as_deref()
    }

    /// Builder used by the record loader and tests.
    pub fn with(mut self, field: RecordField, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    fn slot_mut(&mut self, field: RecordField) -> &mut Option<String> {
        match field {
            RecordField::GeneName => &mut self.gene_name,
            RecordField::Variant => &mut self.variant,
            RecordField::Disease => &mut self.disease,
            RecordField::Function => &mut self.function,
            RecordField::AdMechanism => &mut self.ad_mechanism,
            RecordField::OxidativeStress => &mut self.oxidative_stress,
            RecordField::Angiogenesis => &mut self.angiogenesis,
            RecordField::NeuralSurvival => &mut self.neural_survival,
            RecordField::TeRelevance => &mut self.te_relevance,
            RecordField::ScaffoldStrategy => &mut self.scaffold_strategy,
            RecordField::CellType => &mut self.cell_type,
            RecordField::GrowthFactors => &mut self.growth_factors,
            RecordField::BiomaterialSuggestion => &mut self.biomaterial_suggestion,
            RecordField::RegenerationOutcome => &mut self.regeneration_outcome,
        }
    }

    /// Value for display, with the placeholder for absent or empty text.
    pub fn display(&self, field: RecordField) -> &str {
        match self.get(field) {
            Some(v) if !v.is_empty() => v,
            _ => PLACEHOLDER,
        }
    }

    /// All present text values in field order.
    pub fn values(&self) -> impl Iterator<Item = (RecordField, &str)> + '_ {
        RecordField::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|v| (f, v)))
    }
}
