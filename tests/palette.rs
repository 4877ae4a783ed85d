use signal_chart::domain::chart::Theme;
use strum::IntoEnumIterator;

#[test]
fn theme_palettes() {
    let rendered = Theme::iter()
        .map(|theme| {
            let p = theme.palette();
            format!(
                "{}: background {} grid {} bullish {} bearish {} ma {} price {} label {}",
                theme,
                p.background.to_css(),
                p.grid.to_css(),
                p.bullish.to_css(),
                p.bearish.to_css(),
                p.moving_average.to_css(),
                p.current_price.to_css(),
                p.label_text.to_css()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered);
}
