use std::path::Path;

use console::Style;
use tailor_core::config::DesignerConfig;
use tailor_core::removal::RemovalTier;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    missing: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            missing: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_config_summary(config: &DesignerConfig, source: Option<&Path>) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Tailor Configuration"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(20)));
    println!();

    match source {
        Some(path) => println!(
            "  {:<14}{}",
            s.label.apply_to("Source"),
            s.path.apply_to(path.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Source"),
            s.missing.apply_to("built-in defaults")
        ),
    }
    println!();

    println!("  {}", s.header.apply_to("Background removal"));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Endpoint"),
        s.path.apply_to(&config.removal.endpoint)
    );
    // Only report whether a key is present, never its value.
    if config.removal.api_key().is_some() {
        println!("  {:<14}{}", s.label.apply_to("API key"), s.value.apply_to("set"));
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("API key"),
            s.missing.apply_to("not set")
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Tier"),
        s.value.apply_to(tier_detail(config.removal.tier))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Timeout"),
        s.value.apply_to(match config.removal.timeout() {
            Some(t) => format!("{}s", t.as_secs()),
            None => "none".to_string(),
        })
    );
    println!();

    println!("  {}", s.header.apply_to("New overlays"));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Position"),
        s.value.apply_to(format!("({}, {})", config.placement.x, config.placement.y))
    );
    let size = config.placement.size();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}", size.width, size.height))
    );
    println!();

    println!("  {}", s.header.apply_to("Garment"));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Color"),
        s.value.apply_to(config.garment.color)
    );
    println!();
}

fn tier_detail(tier: RemovalTier) -> String {
    format!("{tier} ({})", tier.as_str())
}
