use crate::format::{
    format_currency, format_energy, format_number, format_surface, format_volume, format_weight,
};
use crate::ui::app::{App, InputMode, View};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Gauge, List, ListItem, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table,
    },
    Frame,
};

// Brandbook colors
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C); // #1f2f3c
const BRAND_ACCENT: Color = Color::Rgb(0x58, 0x6B, 0x71); // #586b71
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0); // #c3d3e0
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68); // #829a68
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // #9e683c
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // #716565

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const COUNT_COLOR: Color = BRAND_GREEN;
const LABEL_STYLE: Style = Style::new().fg(BRAND_MUTED);

const HISTOGRAM_WIDTH: usize = 30;

fn frame_layout(frame: &Frame) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .areas(frame.area())
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let tab = |view: View, label: &'static str| {
        if app.view == view {
            Span::styled(format!(" {label} "), SELECTED_STYLE)
        } else {
            Span::styled(format!(" {label} "), LABEL_STYLE)
        }
    };

    let title = Line::from(vec![
        Span::styled(
            format!(
                " Eco Inspector | {} | {} elements  ",
                app.model_name, app.metrics.elements_analyzed
            ),
            HEADER_STYLE,
        ),
        tab(View::Report, "Impact"),
        tab(View::Index, "Index"),
        tab(View::Search, "Search"),
    ]);

    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn draw_scrollbar(frame: &mut Frame, area: Rect, len: usize, position: usize) {
    let visible_rows = (area.height as usize).saturating_sub(3);
    if len <= visible_rows || visible_rows == 0 || area.width == 0 {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"));
    let mut scrollbar_state = ScrollbarState::new(len).position(position);

    let scrollbar_area = Rect {
        x: area.x + area.width.saturating_sub(1),
        y: area.y + 2,
        width: 1,
        height: area.height.saturating_sub(3),
    };
    frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

fn figure<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<22}"), LABEL_STYLE),
        Span::styled(value, Style::default().fg(BRAND_DARK)),
    ])
}

pub fn draw_report(frame: &mut Frame, app: &App) {
    let [header, main, footer] = frame_layout(frame);
    draw_header(frame, header, app);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(main);
    let [figures_area, recycle_area, balance_area] = Layout::vertical([
        Constraint::Min(10),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(left);

    let m = &app.metrics;
    let figures = vec![
        figure("Surface", format_surface(m.surface_total)),
        figure("Volume", format_volume(m.volume_total)),
        figure("Mass", format_weight(m.mass_total)),
        figure("Carbon footprint", format!("{} CO2", format_weight(m.carbon_footprint))),
        figure("Energy", format_energy(m.energy_consumption)),
        figure("Thermal evaluation", format_energy(m.thermal_eval)),
        figure("Cost estimate", format_currency(m.cost_estimate)),
        figure("Maintenance / year", format_currency(m.maintenance_cost)),
        figure("Potential savings", format_currency(m.potential_savings)),
        figure("CO2 / year", format!("{} CO2", format_weight(m.annual_co2_emissions))),
        figure("Water", format!("{} L", format_number(m.water_consumption))),
        figure("Biodiversity impact", format_number(m.biodiversity_impact)),
        figure("Lifetime", format!("{} years", m.estimated_lifetime_years)),
        figure("Certification", m.certification.to_string()),
    ];
    let figures = Paragraph::new(figures).block(
        Block::default()
            .title(" Impact report ")
            .borders(Borders::ALL),
    );
    frame.render_widget(figures, figures_area);

    let recyclability = Gauge::default()
        .block(Block::default().title(" Recyclability ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(BRAND_GREEN))
        .ratio((m.recyclability_percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.1}%", m.recyclability_percent));
    frame.render_widget(recyclability, recycle_area);

    let balance = Gauge::default()
        .block(Block::default().title(" Global balance ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(BRAND_ORANGE))
        .ratio((m.balance_gauge / 100.0).clamp(0.0, 1.0))
        .label(format_number(m.global_balance));
    frame.render_widget(balance, balance_area);

    draw_breakdown(frame, right, app);
    draw_footer(frame, footer, " Tab View | ↑↓ Scroll | q Quit ");
}

fn draw_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let breakdown = &app.metrics.material_breakdown;
    let visible_rows = (area.height as usize).saturating_sub(3);

    let header = Row::new(vec!["Material", "Elements", "Surface", "Volume", "Mass"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = breakdown
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_rows)
        .map(|(i, entry)| {
            let style = if i == app.scroll_offset {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                entry.material.clone(),
                entry.count.to_string(),
                format_surface(entry.surface),
                format_volume(entry.volume),
                format_weight(entry.mass),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(28),
        Constraint::Percentage(12),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ];

    let title = format!(" Materials ({}) ", breakdown.len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(table, area);
    draw_scrollbar(frame, area, breakdown.len(), app.scroll_offset);
}

pub fn draw_index(frame: &mut Frame, app: &App) {
    let [header, main, footer] = frame_layout(frame);
    draw_header(frame, header, app);

    let [categories_area, side] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(main);
    let [materials_area, levels_area] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(side);

    let index = &app.index;
    let max_count = index
        .category_counts
        .first()
        .map_or(1, |c| c.count.max(1));
    let visible_rows = (categories_area.height as usize).saturating_sub(2);

    let items: Vec<ListItem> = index
        .category_counts
        .iter()
        .skip(app.scroll_offset)
        .take(visible_rows)
        .map(|c| {
            let bar_len = (c.count * HISTOGRAM_WIDTH).div_ceil(max_count);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<24}", c.name), Style::default().fg(BRAND_DARK)),
                Span::styled("█".repeat(bar_len), Style::default().fg(BRAND_ACCENT)),
                Span::styled(format!(" {}", c.count), Style::default().fg(COUNT_COLOR)),
            ]))
        })
        .collect();

    let title = format!(
        " Categories ({}) | {} elements ",
        index.category_counts.len(),
        index.total_count
    );
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, categories_area);
    draw_scrollbar(
        frame,
        categories_area,
        index.category_counts.len(),
        app.scroll_offset,
    );

    draw_names(frame, materials_area, " Materials ", &index.materials);
    draw_names(frame, levels_area, " Levels ", &index.levels);
    draw_footer(frame, footer, " Tab View | ↑↓ Scroll | q Quit ");
}

fn draw_names(frame: &mut Frame, area: Rect, title: &str, names: &[String]) {
    let items: Vec<ListItem> = names.iter().map(|n| ListItem::new(n.as_str())).collect();
    let list = List::new(items).block(
        Block::default()
            .title(format!("{title}({}) ", names.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

pub fn draw_search(frame: &mut Frame, app: &App) {
    let [header, main, footer] = frame_layout(frame);
    draw_header(frame, header, app);

    let [input_area, results_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(5)]).areas(main);

    let editing = app.input_mode == InputMode::Editing;
    let border_style = if editing {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled("/ ", LABEL_STYLE),
        Span::raw(app.search_input.as_str()),
        Span::styled(if editing { "▏" } else { "" }, Style::default().fg(BRAND_ORANGE)),
    ]))
    .block(
        Block::default()
            .title(" Search (FR/EN) ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, input_area);

    draw_results(frame, results_area, app);

    let help = if editing {
        " Enter Search | Esc Cancel "
    } else {
        " / Type query | Tab View | ↑↓ Scroll | q Quit "
    };
    draw_footer(frame, footer, help);
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App) {
    let results = app.result_records();
    let visible_rows = (area.height as usize).saturating_sub(3);
    let dash = || "-".to_string();

    let header = Row::new(vec!["Id", "Name", "Category", "Material", "Level"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = results
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_rows)
        .map(|(i, r)| {
            let style = if i == app.scroll_offset {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            Row::new(vec![
                format!("#{}", r.id),
                r.name.clone(),
                r.category.clone().unwrap_or_else(dash),
                r.material.clone().unwrap_or_else(dash),
                r.level.clone().unwrap_or_else(dash),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(10),
        Constraint::Percentage(30),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ];

    let title = match &app.last_query {
        Some(query) => format!(" \"{query}\": {} result(s) ", results.len()),
        None => " Results ".to_string(),
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(table, area);
    draw_scrollbar(frame, area, results.len(), app.scroll_offset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn scrollbar_skips_panes_too_short_to_hold_it() {
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();

        terminal
            .draw(|frame| {
                for height in 0..3 {
                    draw_scrollbar(frame, Rect::new(0, height, 20, height), 50, 10);
                }
                draw_scrollbar(frame, Rect::new(0, 0, 0, 6), 50, 10);
            })
            .unwrap();
    }

    #[test]
    fn scrollbar_drawn_when_list_overflows() {
        let mut terminal = Terminal::new(TestBackend::new(10, 6)).unwrap();

        terminal
            .draw(|frame| draw_scrollbar(frame, Rect::new(0, 0, 10, 6), 50, 0))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(9, 2)].symbol(), "↑");
    }
}
