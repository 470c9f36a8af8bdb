use crate::App;
use dashtui::model::Interaction;
use dashtui::SortMode;
use ratatui::Frame;

use super::{
    chart, dialogs, header, layout,
    legend::{self, LegendContext},
    search, sidebar, status_bar, summary, table, toast,
};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let ui = &app.model.ui;
    let page = app.model.active_page();
    let query = page.view().query.as_str();

    let search_mode = ui.interaction == Interaction::Filtering;
    let search_visible = search_mode || !query.is_empty();

    let legend_ctx = LegendContext {
        vim_mode: ui.vim_mode,
        search_mode,
        has_search_query: !query.is_empty(),
        dragging: ui.is_dragging(),
        manual_order: page.sort_mode() == SortMode::Manual,
        has_facet: page.config().facet_label.is_some(),
        has_selection: page.selected_count() > 0,
    };
    let legend_height = legend::calculate_legend_height(size.width, legend_ctx);

    // Calculate layout
    let layout_info = layout::calculate_layout(size, legend_height, search_visible, ui.show_chart);

    header::render_header(
        f,
        layout_info.header_area,
        app.model.active_page_id(),
        page.total_len(),
    );

    if let Some(sidebar_area) = layout_info.sidebar_area {
        sidebar::render_sidebar(f, sidebar_area, &app.model.navigation.entries());
    }

    summary::render_summary(
        f,
        layout_info.summary_area,
        &page.summary(),
        &ui.currency_symbol,
    );

    table::render_table(
        f,
        layout_info.table_area,
        page,
        &ui.interaction,
        &ui.currency_symbol,
    );

    if let Some(chart_area) = layout_info.chart_area {
        chart::render_chart(
            f,
            chart_area,
            &page.config().chart_title(),
            &page.chart_points(),
        );
    }

    if let Some(search_area) = layout_info.search_area {
        let facet = page
            .config()
            .facet_label
            .as_deref()
            .map(|label| (label, page.view().facet.label()));
        search::render_search_input(
            f,
            search_area,
            query,
            search_mode,
            page.filtered_len(),
            facet,
        );
    }

    legend::render_legend(f, layout_info.legend_area, legend_ctx);
    status_bar::render_status_bar(f, layout_info.status_area, page);

    // Render confirmation dialog if active
    if let Some(action) = &ui.confirm_action {
        dialogs::render_confirmation(f, action);
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
