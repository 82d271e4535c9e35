use uuid::Uuid;

/// Mint a component id for a freshly dropped component.
///
/// Ids only need to be unique within one page, but random ids keep template
/// instantiation and cross-page copy/paste collision-free without any
/// coordination.
pub fn component_id(kind: &str) -> String {
    format!("{}-{}", kind.to_lowercase(), Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_id_is_prefixed_and_unique() {
        let a = component_id("Hero");
        let b = component_id("Hero");

        assert!(a.starts_with("hero-"));
        assert_ne!(a, b);
    }
}
