use super::traits::AggregatePickerResult;
use leptos::prelude::*;

/// Поле ввода со списком подсказок
///
/// Состояние живёт у владельца: компонент только отображает текст и
/// подсказки и сообщает о вводе, выборе и потере фокуса.
#[component]
pub fn TypeaheadInput<T>(
    #[prop(into)] text: Signal<String>,
    /// Уже отфильтрованные подсказки
    #[prop(into)]
    suggestions: Signal<Vec<T>>,
    on_input: Callback<String>,
    on_select: Callback<T>,
    /// Поле потеряло фокус: список нужно закрыть
    on_close: Callback<()>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView
where
    T: AggregatePickerResult + Clone + Send + Sync + 'static,
{
    view! {
        <div class="typeahead">
            <input
                type="text"
                class="form__input"
                autocomplete="off"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_close.run(())
            />
            {move || {
                let items = suggestions.get();
                (!items.is_empty()).then(|| {
                    view! {
                        <ul class="typeahead__list">
                            {items
                                .into_iter()
                                .map(|item| {
                                    let name = item.display_name();
                                    view! {
                                        <li
                                            class="typeahead__item"
                                            on:mousedown=move |ev| {
                                                ev.prevent_default();
                                                on_select.run(item.clone());
                                            }
                                        >
                                            {name}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                })
            }}
        </div>
    }
}
