use uuid::Uuid;

/// User entity
///
/// The authoritative record for a user. The id is generated by the request
/// layer at creation time and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
}
