use std::time::Instant;

use anyhow::Result;

use showreel_core::carousel::CarouselBackend;
use showreel_core::{AppConfig, CarouselEngine, CarouselSettings, PagingMode};

/// Print how `items` slides page at the given widths, using the guests
/// carousel's breakpoints and items-per-view
pub fn run(
    config: &AppConfig,
    items: usize,
    width: f64,
    container: Option<f64>,
    gap: Option<f64>,
    looping: bool,
) -> Result<()> {
    let mut settings = CarouselSettings::from(&config.guests);
    if let Some(gap) = gap {
        settings.gap = gap;
    }
    settings.paging = if looping {
        PagingMode::Looping
    } else {
        PagingMode::Bounded
    };
    settings.animate = false;

    let mut engine = CarouselEngine::new(vec![(); items], settings);
    engine.initialize(width, container.unwrap_or(width), Instant::now());

    let layout = engine.layout();
    println!("Viewport:    {} ({})", width, engine.viewport_class().as_str());
    println!("Container:   {}", layout.container_width());
    println!("Per view:    {}", engine.per_view());
    println!("Slide width: {:.2}", layout.slide_width());
    println!("Step:        {:.2}", layout.step());
    println!(
        "Pages:       {}{}",
        engine.page_count(),
        if engine.controls_enabled() { "" } else { " (controls disabled)" }
    );

    if !engine.is_ready() {
        println!("\nContainer has no width; nothing to page.");
        return Ok(());
    }

    println!("\n  Page      Offset");
    for (page, offset) in engine.page_offsets().iter().enumerate() {
        println!("  {:>4}  {:>10.2}", page, offset);
    }

    Ok(())
}
