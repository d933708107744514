use super::ActorId;

/// A resource that belongs to exactly one actor. Anything nested under an
/// owned parent inherits its access rules from that parent.
pub trait Owned {
    fn owner(&self) -> &ActorId;
}

pub fn is_owner<R: Owned + ?Sized>(actor: &ActorId, resource: &R) -> bool {
    resource.owner() == actor
}
