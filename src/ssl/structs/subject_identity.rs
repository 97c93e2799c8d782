#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectIdentity {
    pub organization: String,
    pub organizational_unit: String,
    pub common_name: String,
}
