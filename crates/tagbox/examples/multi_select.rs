//! Drive a multi-select combo box through a scripted session.
//!
//! Run with:
//!
//! ```text
//! RUST_LOG=tagbox=debug cargo run -p tagbox --example multi_select
//! ```

use tagbox::prelude::*;
use tracing_subscriber::EnvFilter;

enum Step {
    Focus,
    Type(&'static str),
    Press(Key),
    Click(ClickTarget),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tagbox=info")))
        .init();

    let options = ComboBoxOptions::from_toml_str(
        r#"
placeholder = "Pick languages"
menu_list = ["Rust", "Ruby", "Go", "Haskell", "OCaml", "Python"]
"#,
    )?;
    let mut combo = MultiComboBox::from_options(options);

    combo.selection_changed.connect(|change| {
        println!("  -> selected {:?}, now {:?}", change.value, change.selected_items);
    });
    combo.item_removed.connect(|removed| {
        println!("  -> removed {:?} from position {}", removed.value, removed.index);
    });

    let script = [
        Step::Focus,
        Step::Type("r"),
        Step::Press(Key::ArrowDown),
        Step::Press(Key::ArrowDown),
        Step::Press(Key::Enter),
        Step::Type("go"),
        Step::Click(ClickTarget::Container),
        Step::Type("o"),
        Step::Click(ClickTarget::MenuEntry {
            text: "OCaml".into(),
        }),
        Step::Click(ClickTarget::Badge { key: "0".into() }),
        Step::Press(Key::Backspace),
        Step::Click(ClickTarget::Outside),
    ];

    println!("{}\n", combo.render());
    for step in script {
        match step {
            Step::Focus => {
                println!("focus");
                combo.event(&mut WidgetEvent::FocusIn);
            }
            Step::Type(text) => {
                println!("type {text:?}");
                for ch in text.chars() {
                    let key = Key::from_code(&format!("Key{ch}"));
                    send_key(&mut combo, key, &ch.to_string());
                }
            }
            Step::Press(key) => {
                println!("press {key:?}");
                send_key(&mut combo, key, "");
            }
            Step::Click(target) => {
                println!("click {target:?}");
                combo.event(&mut WidgetEvent::Click(ClickEvent::new(target)));
            }
        }
        println!("{}\n", combo.render());
    }

    println!("final options:\n{}", combo.options().to_json_string()?);
    Ok(())
}

fn send_key(combo: &mut MultiComboBox, key: Key, text: &str) {
    combo.event(&mut WidgetEvent::KeyPress(KeyPressEvent::new(
        key,
        KeyboardModifiers::NONE,
        text,
        false,
    )));
    combo.event(&mut WidgetEvent::KeyRelease(KeyReleaseEvent::new(key, KeyboardModifiers::NONE)));
}
