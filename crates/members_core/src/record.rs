use std::fmt;

/// Gender label attached to a record by the query that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One member of parliament as read from a directory tile.
///
/// `image_url` is already absolute (host prefix + page `src`), while
/// `profile_url` is kept exactly as the page wrote it and only resolved
/// when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub name: String,
    pub gender: Gender,
    pub party: String,
    pub constituency: String,
    pub province: String,
    pub image_url: String,
    pub profile_url: String,
}
