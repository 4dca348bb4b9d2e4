/// Capabilities reserved for platform moderators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeratorCapability {
    /// Ban and unban members
    BanMembers,

    /// Approve or reject offered skills
    ReviewSkills,

    /// Force-cancel any open swap
    CancelSwaps,

    /// Read any member or swap, dashboard statistics
    ViewPlatform,
}

impl ModeratorCapability {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::BanMembers => "ban members",
            Self::ReviewSkills => "review skills",
            Self::CancelSwaps => "force-cancel swaps",
            Self::ViewPlatform => "view platform records",
        }
    }
}
