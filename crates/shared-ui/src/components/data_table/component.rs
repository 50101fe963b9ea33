use dioxus::prelude::*;

/// Bordered, horizontally scrollable table with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Wraps column headers in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { scope: "col", {children} }
    }
}

/// Row class for zebra striping; rows are counted from zero.
pub fn stripe_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "data-table-row even"
    } else {
        "data-table-row odd"
    }
}

/// Body row striped by its position in the table.
#[component]
pub fn DataTableRow(index: usize, children: Element) -> Element {
    rsx! {
        tr { class: stripe_class(index), {children} }
    }
}

#[component]
pub fn DataTableCell(#[props(default = false)] emphasis: bool, children: Element) -> Element {
    rsx! {
        td { class: if emphasis { "cell-strong" } else { "cell-muted" }, {children} }
    }
}
