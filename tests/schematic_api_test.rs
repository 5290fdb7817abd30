//! Integration tests for the schematic drawing API
//!
//! These tests build complete networks through the public API and check the
//! rendered SVG output.

use netsketch::{
    Activation, AnchorConfig, Layer, SketchError, SpecialRole, SvgSurface, Theme, align, connect,
};

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// The actor-critic style network from the library's worked example: a state
/// input and an action input feeding two sigmoid hidden columns and a single
/// output node.
#[test]
fn test_full_node_network_renders() -> Result<(), SketchError> {
    let theme = Theme::default();
    let mut surface = SvgSurface::new();

    let state = Layer::nodes(1, 1).special(SpecialRole::Input).build()?;
    let h1 = Layer::nodes(12, 1).activation(Activation::Sigmoid).build()?;
    let action = Layer::nodes(1, 1).special(SpecialRole::Input).build()?;
    let h2 = Layer::nodes(12, 1).activation(Activation::Sigmoid).build()?;
    let out = Layer::nodes(1, 1).activation(Activation::Sigmoid).build()?;

    let h1 = align::vertical_align(&state, &h1, 0.5);
    let action = align::vertical_align(&h1, &action, -0.12);
    let h2 = align::vertical_align(&h1, &h2, 0.5);
    let out = align::vertical_align(&h2, &out, 0.5);

    let h1 = align::horizontal_align(&state, &h1, 1.0);
    let action = align::horizontal_align(&h1, &action, 0.2);
    let h2 = align::horizontal_align(&h1, &h2, 1.0);
    let out = align::horizontal_align(&h2, &out, 1.0);

    state.draw_nodes(&mut surface, &theme)?;
    state.annotate_nodes(&mut surface, &theme, &["$M_t$"])?;
    h1.draw_nodes(&mut surface, &theme)?;
    action.draw_nodes(&mut surface, &theme)?;
    action.annotate_nodes(&mut surface, &theme, &["$a_t$"])?;
    h2.draw_nodes(&mut surface, &theme)?;
    out.draw_nodes(&mut surface, &theme)?;

    connect::connect_nodes_to_nodes(&mut surface, &theme, &state, &h1)?;
    connect::connect_nodes_to_nodes(&mut surface, &theme, &h1, &h2)?;
    connect::connect_nodes_to_nodes(&mut surface, &theme, &action, &h2)?;
    connect::connect_nodes_to_nodes(&mut surface, &theme, &h2, &out)?;

    let svg = surface.into_document().to_string();
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");

    // One circle per node across the five layers.
    assert_eq!(count_occurrences(&svg, "<circle"), 27);
    // 12 + 144 + 12 + 12 wires.
    assert_eq!(count_occurrences(&svg, "<line"), 180);
    // Activation curves in every non-special node.
    assert_eq!(count_occurrences(&svg, "<polyline"), 25);
    assert_eq!(count_occurrences(&svg, "<text"), 2);
    assert!(svg.contains("$M_t$"));
    assert!(svg.contains("$a_t$"));

    Ok(())
}

#[test]
fn test_wires_render_beneath_shapes() -> Result<(), SketchError> {
    let theme = Theme::default();
    let mut surface = SvgSurface::new();

    let left = Layer::nodes(2, 1).activation(Activation::Relu).build()?;
    let right = Layer::nodes(3, 1).activation(Activation::Relu).build()?;
    let right = align::horizontal_align(&left, &right, 1.0);
    let right = align::vertical_align(&left, &right, 0.5);

    // Shapes drawn before wires on purpose; z-ordering must fix it.
    left.draw_nodes(&mut surface, &theme)?;
    right.draw_nodes(&mut surface, &theme)?;
    connect::connect_nodes_to_nodes(&mut surface, &theme, &left, &right)?;

    let svg = surface.into_document().to_string();
    let wires = svg.find("data-layer=\"wires\"").expect("wires group");
    let shapes = svg.find("data-layer=\"shapes\"").expect("shapes group");
    let labels_absent = !svg.contains("data-layer=\"labels\"");
    assert!(wires < shapes, "wires group should precede shapes group");
    assert!(labels_absent, "no labels were drawn");

    Ok(())
}

#[test]
fn test_mixed_rect_and_node_network() -> Result<(), SketchError> {
    let theme = Theme::default();
    let mut surface = SvgSurface::new();

    let input = Layer::nodes(6, 1).special(SpecialRole::Input).build()?;
    let encoder = Layer::rect(20, 4).activation(Activation::Relu).build()?;
    let encoder = align::horizontal_align(&input, &encoder, 1.5);
    let encoder = align::vertical_align(&input, &encoder, 0.5);
    let head = Layer::nodes(3, 1).activation(Activation::Linear).build()?;
    let head = align::horizontal_align(&encoder, &head, 3.5);
    let head = align::vertical_align(&encoder, &head, 0.5);

    let anchor_pad = AnchorConfig::new(0.1, 0.1);

    input.draw_nodes(&mut surface, &theme)?;
    encoder.draw_rect(&mut surface, &theme, 0.1)?;
    encoder.annotate_rect(&mut surface, &theme, "encoder", 0.0, 0.15)?;
    head.draw_nodes(&mut surface, &theme)?;

    connect::connect_nodes_to_rect(&mut surface, &theme, &input, &encoder, &anchor_pad)?;
    connect::connect_rect_to_nodes(&mut surface, &theme, &encoder, &head, &anchor_pad)?;

    let svg = surface.into_document().to_string();
    // 6 input nodes plus 3 head nodes.
    assert_eq!(count_occurrences(&svg, "<circle"), 9);
    assert_eq!(count_occurrences(&svg, "<rect"), 1);
    // 6·2 inbound plus 2·3 outbound wires.
    assert_eq!(count_occurrences(&svg, "<line"), 18);
    assert!(svg.contains("encoder"));

    Ok(())
}

#[test]
fn test_mode_errors_surface_through_api() {
    let theme = Theme::default();
    let mut surface = SvgSurface::new();

    let rect = Layer::rect(4, 2).build().expect("valid layer");
    let result = rect.draw_nodes(&mut surface, &theme);
    assert!(matches!(result, Err(SketchError::InvalidMode { .. })));

    let nodes = Layer::nodes(4, 1).build().expect("valid layer");
    let result = connect::connect_rect_to_rect(
        &mut surface,
        &theme,
        &nodes,
        &rect,
        &AnchorConfig::default(),
        &AnchorConfig::default(),
    );
    assert!(matches!(result, Err(SketchError::InvalidMode { .. })));
}

#[test]
fn test_styled_theme_flows_into_output() -> Result<(), SketchError> {
    let config: netsketch::StyleConfig = serde_json::from_str(
        r#"{
            "background_color": "white",
            "wire_color": "gray",
            "activation_color": "crimson"
        }"#,
    )
    .expect("config should deserialize");
    let theme = config.theme()?;

    let mut surface = SvgSurface::new().with_background(theme.background().unwrap());
    let left = Layer::nodes(2, 1).activation(Activation::Sigmoid).build()?;
    let right = Layer::nodes(2, 1).activation(Activation::Sigmoid).build()?;
    let right = align::horizontal_align(&left, &right, 1.0);

    left.draw_nodes(&mut surface, &theme)?;
    right.draw_nodes(&mut surface, &theme)?;
    connect::connect_nodes_to_nodes(&mut surface, &theme, &left, &right)?;

    let svg = surface.into_document().to_string();
    assert!(svg.contains("stroke=\"gray\""));
    assert!(svg.contains("stroke=\"crimson\""));
    assert!(svg.contains("fill=\"white\""));

    Ok(())
}
