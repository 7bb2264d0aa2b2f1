use leptos::prelude::*;

/// Indicator glyph for a sortable column header.
pub fn sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Clickable table header cell driving the active sort.
///
/// Clicking the active field toggles direction; clicking a new field
/// sorts ascending (the list state owns that rule, this cell only
/// reports the click and renders the indicator).
#[component]
pub fn SortableHeader(
    #[prop(into)] label: String,

    /// Field this column sorts by
    #[prop(into)]
    field: String,

    /// Currently active sort field
    #[prop(into)]
    current_field: Signal<String>,

    /// Direction of the active sort
    #[prop(into)]
    ascending: Signal<bool>,

    /// Callback with the clicked field name
    on_sort: Callback<String>,
) -> impl IntoView {
    let field_for_click = field.clone();
    let field_for_indicator = field.clone();

    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            on:click=move |_| on_sort.run(field_for_click.clone())
        >
            {label}
            <span class="table__sort-indicator">
                {move || sort_indicator(&current_field.get(), &field_for_indicator, ascending.get())}
            </span>
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_reflects_active_field_and_direction() {
        assert_eq!(sort_indicator("name", "name", true), " ▲");
        assert_eq!(sort_indicator("name", "name", false), " ▼");
        assert_eq!(sort_indicator("name", "email", true), " ⇅");
    }
}
