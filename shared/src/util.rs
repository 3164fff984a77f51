/// Generate a random record id (UUID v4, hyphenated).
///
/// Uniqueness against already-issued ids is enforced by the store that
/// owns the collection, not here.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_is_uuid() {
        let id = generate_id();
        assert_eq!(id.len(), 36);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert_ne!(id, generate_id());
    }
}
