pub mod pie_chart;

use iced::{
    Element, Length,
    widget::{Column, button, column, container, row, scrollable, text},
};
use iced_widget::container::bordered_box;

/// Clickable list of labels; `on_select` receives the clicked position.
pub fn entry_list<'a, Message>(
    labels: Vec<String>,
    on_select: impl Fn(usize) -> Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let entries = labels.into_iter().enumerate().map(|(position, label)| {
        Element::from(
            button(text(label).size(14))
                .on_press(on_select(position))
                .width(Length::Fill)
                .style(button::text),
        )
    });

    scrollable(Column::with_children(entries).spacing(2).padding(5))
        .height(Length::Fill)
        .into()
}

/// Window frame: top bar across the full width, list on the left and the
/// detail area filling the rest.
pub fn layout<'a, Message>(
    top_bar: impl Into<Element<'a, Message>>,
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(column![
        container(top_bar.into()).width(Length::Fill).style(bordered_box),
        row![
            container(sidebar.into())
                .width(Length::FillPortion(1))
                .height(Length::Fill)
                .style(bordered_box),
            container(main_content.into())
                .width(Length::FillPortion(3))
                .height(Length::Fill),
        ],
    ])
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
