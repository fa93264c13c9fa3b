use iced::{
    Element, Length, Size, Task,
    widget::{button, column, container, row, scrollable, text, text_input},
};
use rfd::AsyncFileDialog;
use tracing::debug;

use super::{
    AppState, Message,
    widgets::{entry_list, layout, pie_chart::PieChartView},
};
use crate::{
    config::Config,
    core::{PieChart, Selection},
};

pub struct ResumeScreeningApp {
    state: AppState,
    chart: PieChartView,
}

impl ResumeScreeningApp {
    pub fn new(config: Config) -> Self {
        let state = AppState::new(&config);
        let chart = PieChartView::new(PieChart::from_counts(state.index.category_counts()));
        Self { state, chart }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn title(&self) -> String {
        "Resume Screening".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => {
                self.state.search_query = query;
                Task::none()
            }
            Message::SearchSubmitted => {
                let state = &mut self.state;
                state.navigator.submit_search(&state.index, &state.search_query);
                Task::none()
            }
            Message::EntrySelected(position) => {
                let state = &mut self.state;
                if let Selection::Ignored = state.navigator.select(&state.index, position) {
                    debug!(position, "No entry at position");
                }
                Task::none()
            }
            Message::Back => {
                self.state.navigator.back();
                Task::none()
            }
            Message::OpenDataset => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Open Resume Dataset")
                    .add_filter("CSV", &["csv"])
                    .pick_file(),
                |handle| Message::DatasetPicked(handle.map(|data| data.path().to_path_buf())),
            ),
            Message::DatasetPicked(Some(path)) => {
                self.state.open_dataset(path);
                self.chart
                    .set_chart(PieChart::from_counts(self.state.index.category_counts()));
                Task::none()
            }
            Message::DatasetPicked(None) => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let navigator = &self.state.navigator;

        let top_bar = row![
            text_input("Search resumes...", &self.state.search_query)
                .on_input(Message::SearchChanged)
                .on_submit(Message::SearchSubmitted)
                .padding(8),
            button("Search").on_press(Message::SearchSubmitted),
            button("Open").on_press(Message::OpenDataset),
            button("Back").on_press(Message::Back),
        ]
        .spacing(10)
        .padding(10);

        let sidebar = entry_list(navigator.entries(&self.state.index), Message::EntrySelected);

        let main_content = column![
            text(navigator.heading()).size(24),
            self.chart.view(),
            container(scrollable(text(navigator.detail().text().to_string()).size(14)))
                .height(Length::Fill)
                .padding(10),
            text(self.state.status()).size(12),
        ]
        .spacing(10)
        .padding(10);

        layout(top_bar, sidebar, main_content)
    }
}

/// Open the main window and block until it is closed.
pub fn run(config: Config) -> anyhow::Result<()> {
    iced::application(
        move || ResumeScreeningApp::new(config.clone()),
        ResumeScreeningApp::update,
        ResumeScreeningApp::view,
    )
    .title(ResumeScreeningApp::title)
    .window_size(Size::new(800.0, 600.0))
    .run()
    .map_err(|e| anyhow::anyhow!("Failed to run window: {}", e))
}
