use imcodegen_core::config::Config;
use imcodegen_languages::{CppExtractor, Extractor};
use imcodegen_render::{generate_header, GeneratorOptions};
use pretty_assertions::assert_eq;
use std::path::Path;

const HEADER: &str = r#"
#pragma once

namespace game
{
    // @imgui @name("Player Movement")
    struct player_movement
    {
        // @range(0, 20)
        float base_speed;

        // @color
        glm::vec3 trail_color;

        const int max_jumps;

        // @hide
        float internal_timer;

        DEBUG_ONLY(u32 frames_airborne); // @readonly

        MyCustomWidget custom;
    };

    struct not_exported
    {
        float ignored;
    };
}
"#;

const BINDINGS: &str = r#"
<imgui_codegen>
  <bindings>
    <binding type="float">
      <widget>changed |= ImGui::SliderFloat("{display}", &amp;{param}.{var}, {min}, {max});</widget>
    </binding>
    <binding type="int">
      <widget>changed |= ImGui::InputInt("{display}", &amp;{param}.{var});</widget>
      <readonly_widget>ImGui::Text("{display}: %d", {param}.{var});</readonly_widget>
    </binding>
    <binding type="u32">
      <widget>changed |= ImGui::InputScalar("{display}", ImGuiDataType_U32, &amp;{param}.{var});</widget>
      <readonly_widget>ImGui::Text("{display}: %u", {param}.{var});</readonly_widget>
    </binding>
    <binding type="vec3">
      <widget>changed |= ImGui::DragFloat3("{display}", &amp;{param}.{var}.x);</widget>
      <color_widget>changed |= ImGui::ColorEdit3("{display}", &amp;{param}.{var}.x);</color_widget>
    </binding>
  </bindings>
</imgui_codegen>
"#;

fn render(opts: &GeneratorOptions) -> String {
    let structs = CppExtractor
        .extract(HEADER, Path::new("player.hpp"))
        .expect("header parses");
    let config = Config::from_xml_str(BINDINGS).expect("bindings parse");
    generate_header(&structs, &config, opts).expect("header renders")
}

fn body_lines(out: &str) -> Vec<&str> {
    let start = out.find("bool changed = false;").expect("draw body");
    let end = out.find("return changed;").expect("draw end");
    out[start..end]
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .collect()
}

#[test]
fn test_full_pipeline_body() {
    let out = render(&GeneratorOptions::default());

    assert_eq!(
        body_lines(&out),
        vec![
            r#"        changed |= ImGui::SliderFloat("Base Speed", &data.base_speed, 0.0f, 20.0f);"#,
            r#"        changed |= ImGui::ColorEdit3("Trail Color", &data.trail_color.x);"#,
            r#"        ImGui::Text("Max Jumps: %d", data.max_jumps);"#,
            "        DEBUG_ONLY(",
            r#"        ImGui::Text("Frames Airborne: %u", data.frames_airborne);"#,
            "        )",
            r#"        ImGui::TextDisabled("Custom: [MyCustomWidget]");"#,
        ]
    );
}

#[test]
fn test_full_pipeline_structure() {
    let opts = GeneratorOptions {
        includes: vec!["game/player.hpp".to_string()],
        type_list: Some("editable_types".to_string()),
        ..GeneratorOptions::default()
    };
    let out = render(&opts);

    assert!(out.contains("#include <game/player.hpp>"));
    assert!(out.contains("struct type_name<game::player_movement>"));
    assert!(out.contains(r#"value = "Player Movement";"#));
    assert!(out.contains("inline bool draw(game::player_movement& data)"));
    assert!(out.contains("using editable_types = type_list<game::player_movement>;"));
    assert!(!out.contains("not_exported"));
    assert!(!out.contains("internal_timer"));
}
