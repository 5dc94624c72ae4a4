use super::*;
use crate::state::services::SERVICES;

#[test]
fn every_service_icon_has_a_glyph() {
    for service in &SERVICES {
        assert_ne!(glyph(service.icon), "•", "missing glyph for {}", service.icon);
    }
}

#[test]
fn unknown_icon_falls_back_to_dot() {
    assert_eq!(glyph("Nope"), "•");
}
