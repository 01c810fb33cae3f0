use super::view_model::TransactionsViewModel;
use crate::domain::a001_transaction::forms::NewTransactionForm;
use contracts::domain::a001_transaction::aggregate::TransactionStatus;
use leptos::prelude::*;

#[component]
pub fn AddTransactionForm(vm: TransactionsViewModel) -> impl IntoView {
    let form = RwSignal::new(NewTransactionForm::default());
    let (error, set_error) = signal::<Option<String>>(None);

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
        <form class="form-card" on:submit=on_submit>
            <h3 class="form-card__title">"Add New Transaction"</h3>
            <div class="form-card__row">
                <input
                    type="text"
                    class="form__input"
                    placeholder="Product or Service Description"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
                <input
                    type="text"
                    inputmode="decimal"
                    class="form__input"
                    placeholder="Amount"
                    prop:value=move || form.with(|f| f.amount.clone())
                    on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                />
                <select
                    class="form__select"
                    prop:value=move || form.with(|f| f.status.as_str().to_string())
                    on:change=move |ev| {
                        if let Ok(status) = event_target_value(&ev).parse::<TransactionStatus>() {
                            form.update(|f| f.status = status);
                        }
                    }
                >
                    {TransactionStatus::all()
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
                <button type="submit" class="button button--primary">"Add Transaction"</button>
            </div>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </form>
    }
}
