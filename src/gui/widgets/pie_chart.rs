use iced::{
    Color, Element, Length, Pixels, Point, Rectangle, Renderer, Theme, Vector, mouse,
    widget::{
        Canvas,
        canvas::{self, Cache, Frame, Path, Text},
    },
};

use crate::core::{
    PieChart,
    chart::{self as model, CHART_TITLE},
};

const TITLE_HEIGHT: f32 = 24.0;
const LABEL_SIZE: f32 = 12.0;
// Arc segments per full turn when tracing a slice outline.
const ARC_SEGMENTS: f32 = 180.0;

/// Canvas program drawing the category distribution.
///
/// Geometry is cached until [`PieChartView::set_chart`] replaces the data.
pub struct PieChartView {
    chart: PieChart,
    cache: Cache,
}

impl std::fmt::Debug for PieChartView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PieChartView")
            .field("chart", &self.chart)
            .finish()
    }
}

impl PieChartView {
    pub fn new(chart: PieChart) -> Self {
        Self {
            chart,
            cache: Cache::new(),
        }
    }

    pub fn set_chart(&mut self, chart: PieChart) {
        self.chart = chart;
        self.cache.clear();
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(260.0))
            .into()
    }
}

impl<Message> canvas::Program<Message> for PieChartView {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let text_color = theme.palette().text;
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            draw_title(frame, text_color);

            if self.chart.is_empty() {
                frame.fill_text(Text {
                    content: "No data".to_string(),
                    position: frame.center(),
                    color: text_color,
                    size: Pixels(LABEL_SIZE),
                    ..Text::default()
                });
                return;
            }

            let center = frame.center() + Vector::new(0.0, TITLE_HEIGHT / 2.0);
            let radius = ((frame.height() - TITLE_HEIGHT).min(frame.width()) / 2.0 - 20.0).max(10.0);

            for slice in &self.chart.slices {
                frame.fill(&wedge(center, radius, slice), to_color(slice.color));
            }
            for slice in &self.chart.slices {
                draw_labels(frame, center, radius, slice, text_color);
            }
        });
        vec![geometry]
    }
}

fn draw_title(frame: &mut Frame, color: Color) {
    let width_estimate = CHART_TITLE.len() as f32 * LABEL_SIZE * 0.6;
    frame.fill_text(Text {
        content: CHART_TITLE.to_string(),
        position: Point::new((frame.width() - width_estimate) / 2.0, 4.0),
        color,
        size: Pixels(LABEL_SIZE + 2.0),
        ..Text::default()
    });
}

fn draw_labels(frame: &mut Frame, center: Point, radius: f32, slice: &model::PieSlice, color: Color) {
    let angle = slice.mid_angle();
    let direction = Vector::new(angle.cos(), angle.sin());

    let percent = slice.percent_label();
    frame.fill_text(Text {
        position: center + direction * (radius * 0.6) - half_extent(&percent),
        content: percent,
        color: Color::BLACK,
        size: Pixels(LABEL_SIZE),
        ..Text::default()
    });

    let name_position = center + direction * (radius * 1.1);
    let name_offset = if direction.x < 0.0 {
        Vector::new(-(slice.category.len() as f32) * LABEL_SIZE * 0.6, -LABEL_SIZE / 2.0)
    } else {
        Vector::new(0.0, -LABEL_SIZE / 2.0)
    };
    frame.fill_text(Text {
        content: slice.category.clone(),
        position: name_position + name_offset,
        color,
        size: Pixels(LABEL_SIZE),
        ..Text::default()
    });
}

fn half_extent(label: &str) -> Vector {
    Vector::new(label.len() as f32 * LABEL_SIZE * 0.3, LABEL_SIZE / 2.0)
}

/// Closed outline of one slice: centre, then along the arc.
fn wedge(center: Point, radius: f32, slice: &model::PieSlice) -> Path {
    let sweep = slice.end_angle - slice.start_angle;
    let steps = ((sweep / std::f32::consts::TAU) * ARC_SEGMENTS).ceil().max(1.0) as usize;

    Path::new(|builder| {
        builder.move_to(center);
        for step in 0..=steps {
            let angle = slice.start_angle + sweep * step as f32 / steps as f32;
            builder.line_to(Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }
        builder.close();
    })
}

fn to_color(color: model::Color) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}
