//! Main render/view function (View in TEA pattern)


use cinemax_app::load_state::LoadState;
use cinemax_app::recommendation::SessionState;
use cinemax_app::state::{AppState, ContentView, Focus};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout::{self, HitAreas};
use crate::theme::{palette, styles};
use crate::widgets::{self, detail_modal, placeholder};

/// Height of the featured card on Home
const HERO_HEIGHT: u16 = 8;

/// Render the complete UI (View function in TEA)
///
/// Returns the clickable areas of the frame for mouse hit-testing. The only
/// state touched is the detail overlay's scroll offset, which is clamped to
/// the rendered content.
pub fn view(frame: &mut Frame, state: &mut AppState) -> HitAreas {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let detail_open = state.detail.is_open();
    let search_focused = state.focus == Focus::Search && !detail_open;
    let results_focused = state.focus == Focus::Results && !detail_open;

    frame.render_widget(widgets::MainHeader::new(state.section), areas.header);
    frame.render_widget(
        widgets::SearchBar::new(&state.search_input, search_focused)
            .pending(state.suggestions.is_pending(), state.tick),
        areas.search,
    );
    render_content(frame, state, areas.content, results_focused);
    let status_bar = widgets::StatusBar::new(state).compact(layout::use_compact_status(area));
    let footer_links = status_bar.link_areas(areas.status);
    frame.render_widget(status_bar, areas.status);

    let mut hits = HitAreas {
        search_input: areas.search,
        nav_tabs: widgets::MainHeader::tab_areas(areas.header),
        footer_links,
        ..HitAreas::default()
    };

    if state.suggestions.is_open() && !detail_open {
        let items = state.suggestions.items();
        let highlighted = state.suggestions.highlighted();
        if let Some(dropdown) = layout::suggestion_dropdown(areas.search, areas.content, items.len())
        {
            frame.render_widget(widgets::SuggestionList::new(items, highlighted), dropdown);
            let first = widgets::SuggestionList::first_visible(dropdown, items.len(), highlighted);
            hits.suggestion_rows =
                widgets::SuggestionList::row_areas(dropdown, items.len() - first);
            hits.suggestion_offset = first;
        }
    }

    if detail_open {
        let panel = detail_modal::panel_area(area);
        clamp_detail_scroll(state, panel);
        if let Some(content) = state.detail.content() {
            frame.render_widget(
                widgets::DetailModal::new(content)
                    .scroll(state.detail.scroll())
                    .tick(state.tick),
                area,
            );
        }
        hits.detail_panel = Some(panel);
        hits.nav_tabs.clear();
        hits.footer_links.clear();
    }

    hits
}

fn clamp_detail_scroll(state: &mut AppState, panel: Rect) {
    let inner = detail_modal::content_area(panel);
    let max = match state.detail.content() {
        Some(LoadState::Loaded(detail)) => {
            detail_modal::content_height(detail, inner.width).saturating_sub(inner.height)
        }
        _ => 0,
    };
    state.detail.clamp_scroll(max);
}

fn render_content(frame: &mut Frame, state: &AppState, area: Rect, focused: bool) {
    match state.content_view() {
        ContentView::Legal(page) => {
            frame.render_widget(widgets::LegalPageView::new(page).focused(focused), area);
        }
        ContentView::Recommendations => render_recommendations(frame, state, area, focused),
        ContentView::Home => render_home(frame, state, area, focused),
        ContentView::Genres => {
            frame.render_widget(
                widgets::GenrePanel::new(&state.genres)
                    .cursors(state.page.genre_cursor, state.page.cursor)
                    .focus(focused, state.genre_catalog_focused())
                    .tick(state.tick),
                area,
            );
        }
        ContentView::TopRated => render_top_rated(frame, state, area, focused),
    }
}

fn render_recommendations(frame: &mut Frame, state: &AppState, area: Rect, focused: bool) {
    let block = styles::glass_block(focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = state.recommendations.title().unwrap_or_default();
    match state.recommendations.state() {
        SessionState::Loading => {
            frame.render_widget(
                placeholder::loading(&format!("Finding movies like \"{}\"", title), state.tick),
                inner,
            );
        }
        SessionState::Failed(message) => {
            frame.render_widget(placeholder::error_banner(message), inner);
        }
        SessionState::Success(movies) if movies.is_empty() => {
            frame.render_widget(
                placeholder::empty(&format!("No recommendations found for \"{}\".", title)),
                inner,
            );
        }
        SessionState::Success(movies) => {
            let heading = Line::from(vec![
                Span::styled("Because you liked ", styles::text_secondary()),
                Span::styled(title, styles::accent_bold()),
                Span::styled(format!("  {} results", movies.len()), styles::text_muted()),
            ]);
            frame.render_widget(
                widgets::MovieList::new(heading, movies).cursor(Some(state.page.cursor), focused),
                inner,
            );
        }
        SessionState::Idle => {}
    }
}

/// Empty, loading or failed states of the top-rated list.
///
/// Returns true when something other than the list was drawn.
fn render_top_movies_placeholder(frame: &mut Frame, state: &AppState, area: Rect) -> bool {
    match &state.top_movies {
        LoadState::NotLoaded | LoadState::Loading => {
            frame.render_widget(placeholder::loading("Loading top movies", state.tick), area);
            true
        }
        LoadState::Failed(_) => {
            frame.render_widget(
                placeholder::empty("Top movies are unavailable right now."),
                area,
            );
            true
        }
        LoadState::Loaded(movies) if movies.is_empty() => {
            frame.render_widget(placeholder::empty("No movies to show yet."), area);
            true
        }
        LoadState::Loaded(_) => false,
    }
}

fn render_home(frame: &mut Frame, state: &AppState, area: Rect, focused: bool) {
    if render_top_movies_placeholder(frame, state, area) {
        return;
    }
    let movies = state.top_movies.items();
    let cursor = state.page.cursor;

    let [hero_area, list_area] =
        Layout::vertical([Constraint::Length(HERO_HEIGHT), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        widgets::HeroCard::new(&movies[0], focused && cursor == 0),
        hero_area,
    );

    let block = styles::glass_block(focused && cursor > 0);
    let inner = block.inner(list_area);
    frame.render_widget(block, list_area);
    frame.render_widget(
        widgets::MovieList::new(Span::styled("Top Rated", styles::accent_bold()), &movies[1..])
            .rank_from(2)
            .cursor(cursor.checked_sub(1), focused),
        inner,
    );
}

fn render_top_rated(frame: &mut Frame, state: &AppState, area: Rect, focused: bool) {
    let block = styles::glass_block(focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if render_top_movies_placeholder(frame, state, inner) {
        return;
    }
    let movies = state.top_movies.items();
    frame.render_widget(
        widgets::MovieList::new(
            Span::styled("Top Rated Movies", styles::accent_bold()),
            movies,
        )
        .cursor(Some(state.page.cursor), focused),
        inner,
    );
}
