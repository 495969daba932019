use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StagecraftError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StagecraftError::timeline("x")
            .to_string()
            .contains("timeline error:")
    );
    assert!(
        StagecraftError::scroll("x")
            .to_string()
            .contains("scroll error:")
    );
    assert!(
        StagecraftError::renderer("x")
            .to_string()
            .contains("renderer error:")
    );
    assert!(
        StagecraftError::config("x")
            .to_string()
            .contains("config error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StagecraftError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
