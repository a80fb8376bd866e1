use leptos::prelude::*;

/// Build `(value, label)` option pairs where the label is the value itself
pub fn options_from_labels(labels: &[&str]) -> Vec<(String, String)> {
    labels
        .iter()
        .map(|l| (l.to_string(), l.to_string()))
        .collect()
}

/// Select component with label and an empty placeholder option.
///
/// A `value` that is not among `options` renders as the placeholder.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value, empty for "nothing selected"
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Text of the leading empty option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// `name` attribute
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let select_name = move || name.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                name=select_name
                class=move || format!("form__select {}", additional_class())
                disabled=move || disabled.get()
                required=required
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_default()}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_labels() {
        assert_eq!(
            options_from_labels(&["Audit", "Tax Accounting"]),
            vec![
                ("Audit".to_string(), "Audit".to_string()),
                ("Tax Accounting".to_string(), "Tax Accounting".to_string()),
            ]
        );
        assert!(options_from_labels(&[]).is_empty());
    }
}
