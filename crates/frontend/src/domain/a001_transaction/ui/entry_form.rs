use super::view_model::TransactionsViewModel;
use crate::domain::a001_transaction::forms::{SaleEntryForm, PAYMENT_METHODS};
use crate::domain::a002_product::api::fetch_products;
use crate::shared::picker_aggregate::TypeaheadInput;
use crate::shared::state::use_request_scope;
use contracts::domain::a002_product::aggregate::Product;
use leptos::prelude::*;

/// Продажа товара: имя из каталога через подсказки
#[component]
pub fn TransactionEntryForm(vm: TransactionsViewModel) -> impl IntoView {
    let form = RwSignal::new(SaleEntryForm::default());
    let catalog = RwSignal::new(Vec::<Product>::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let scope = use_request_scope();
    let ticket = scope.issue();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = fetch_products().await;
        if !scope.accept(ticket) {
            log::debug!("dropping product catalog for a disposed form");
            return;
        }
        match outcome {
            Ok(items) => catalog.set(items),
            Err(e) => {
                log::warn!("{}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    });

    let text = Signal::derive(move || form.with(|f| f.product.text().to_string()));
    let suggestions = Signal::derive(move || form.with(|f| catalog.with(|c| f.suggestions(c))));
    let on_input = Callback::new(move |value: String| form.update(|f| f.set_product_text(value)));
    let on_select = Callback::new(move |product: Product| form.update(|f| f.select_product(product)));
    let on_close = Callback::new(move |_: ()| form.update(|f| f.product.close()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(|f| f.submit()) {
            Err(msg) => set_error.set(Some(msg)),
            Ok(dto) => {
                set_error.set(None);
                vm.mutate(
                    move |sync| async move { sync.create(dto).await },
                    move |res| {
                        if res.is_ok() {
                            form.update(|f| f.reset());
                        }
                    },
                );
            }
        }
    };

    view! {
        <div class="form-card">
            <h3 class="form-card__title">"New Transaction"</h3>
            <form class="form-card__row" on:submit=on_submit>
                <TypeaheadInput
                    text=text
                    suggestions=suggestions
                    on_input=on_input
                    on_select=on_select
                    on_close=on_close
                    placeholder="Start typing product name..."
                />
                <input
                    type="text"
                    class="form__input form__input--readonly"
                    placeholder="Category"
                    readonly=true
                    prop:value=move || form.with(|f| f.category.clone())
                />
                <input
                    type="text"
                    inputmode="decimal"
                    class="form__input"
                    placeholder="Sale Price"
                    prop:value=move || form.with(|f| f.unit_price.clone())
                    on:input=move |ev| form.update(|f| f.unit_price = event_target_value(&ev))
                />
                <select
                    class="form__select"
                    prop:value=move || form.with(|f| f.payment_method.clone())
                    on:change=move |ev| form.update(|f| f.payment_method = event_target_value(&ev))
                >
                    {PAYMENT_METHODS
                        .into_iter()
                        .map(|m| view! { <option value=m>{m}</option> })
                        .collect_view()}
                </select>
                <button type="submit" class="button button--primary">"Add Sale"</button>
            </form>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
