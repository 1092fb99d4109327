//! The editorial author singleton.

use newsroom::models::builtin;
use uuid::Uuid;

/// Generated author row; upserted by its fixed email natural key.
#[derive(Debug, Clone)]
pub struct GeneratedAuthor {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub title: String,
    pub bio: String,
}

/// The single author every seeded article is attributed to.
pub fn editorial_author() -> GeneratedAuthor {
    GeneratedAuthor {
        id: Uuid::new_v4(),
        email: builtin::AUTHOR_EMAIL.to_string(),
        name: "Editorial Team".to_string(),
        title: "Newsroom Editors".to_string(),
        bio: "Research, reporting, and analysis from the newsroom editorial desk.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_uses_builtin_natural_key() {
        assert_eq!(editorial_author().email, builtin::AUTHOR_EMAIL);
    }
}
