use dioxus::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub struct TableColumn {
    pub title: String,
    pub width: Option<&'static str>,
    pub alignment: ColumnAlignment,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub enum ColumnAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl TableColumn {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: None,
            alignment: ColumnAlignment::Left,
        }
    }

    pub fn with_width(mut self, width: &'static str) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align_center(mut self) -> Self {
        self.alignment = ColumnAlignment::Center;
        self
    }

    pub fn align_right(mut self) -> Self {
        self.alignment = ColumnAlignment::Right;
        self
    }
}

/// Header row plus caller-supplied body rows.
#[component]
pub fn Table(
    #[props(default = "table table-zebra")] class: &'static str,
    columns: Vec<TableColumn>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "overflow-x-auto",
            table { class: class,
                thead {
                    tr {
                        for col in columns {
                            th {
                                class: format!(
                                    "{} {}",
                                    match col.alignment {
                                        ColumnAlignment::Left => "text-left",
                                        ColumnAlignment::Center => "text-center",
                                        ColumnAlignment::Right => "text-right",
                                    },
                                    col.width.unwrap_or(""),
                                ),
                                "{col.title}"
                            }
                        }
                    }
                }
                tbody {
                    {children}
                }
            }
        }
    }
}
