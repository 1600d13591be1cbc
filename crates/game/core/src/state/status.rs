/// Lifecycle state of a hero.
///
/// Displayed as `Idle`, `Training`, `Sleeping`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Status {
    /// Available for a new expedition.
    #[default]
    Idle,
    /// Away on an expedition.
    Training,
    /// Reserved; no transition enters this state yet.
    Sleeping,
}

impl Status {
    pub fn is_idle(&self) -> bool {
        matches!(self, Status::Idle)
    }
}
