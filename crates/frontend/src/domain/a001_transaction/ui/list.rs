use super::add_form::AddTransactionForm;
use super::view_model::TransactionsViewModel;
use crate::domain::a001_transaction::editor::{EditField, EditState};
use crate::shared::icons::icon;
use contracts::domain::a001_transaction::aggregate::{Transaction, TransactionId, TransactionStatus};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

pub fn status_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "status-badge status-badge--completed",
        TransactionStatus::Pending => "status-badge status-badge--pending",
        TransactionStatus::Failed => "status-badge status-badge--failed",
    }
}

fn edit_input(edit: RwSignal<EditState>, field: EditField, input_type: &'static str) -> impl IntoView {
    view! {
        <input
            type=input_type
            class="table__input"
            prop:value=move || {
                edit.with(|e| e.draft().map(|d| d.get(field).to_string()).unwrap_or_default())
            }
            on:input=move |ev| edit.update(|e| e.update_field(field, event_target_value(&ev)))
        />
    }
}

fn edit_row(edit: RwSignal<EditState>, on_save: Callback<()>) -> AnyView {
    view! {
        <tr class="table__row table__row--editing">
            <td>{edit_input(edit, EditField::Date, "date")}</td>
            <td>{edit_input(edit, EditField::Description, "text")}</td>
            <td>{edit_input(edit, EditField::Amount, "text")}</td>
            <td>
                <select
                    class="table__input"
                    prop:value=move || {
                        edit.with(|e| e.draft().map(|d| d.get(EditField::Status).to_string()).unwrap_or_default())
                    }
                    on:change=move |ev| edit.update(|e| e.update_field(EditField::Status, event_target_value(&ev)))
                >
                    {TransactionStatus::all()
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
            </td>
            <td class="table__actions">
                <button class="action-button action-button--save" title="Save" on:click=move |_| on_save.run(())>
                    {icon("save")}
                </button>
                <button class="action-button action-button--cancel" title="Cancel" on:click=move |_| edit.update(|e| e.cancel_edit())>
                    {icon("cancel")}
                </button>
            </td>
        </tr>
    }
    .into_any()
}

fn read_row(tx: Transaction, edit: RwSignal<EditState>, on_delete: Callback<TransactionId>) -> AnyView {
    let id = tx.id;
    let record = tx.clone();
    view! {
        <tr class="table__row">
            <td>{tx.date}</td>
            <td>{tx.description}</td>
            <td class="table__cell--number">{format!("{:.2}", tx.amount)}</td>
            <td><span class=status_class(tx.status)>{tx.status.as_str()}</span></td>
            <td class="table__actions">
                <button class="action-button action-button--edit" title="Edit" on:click=move |_| edit.update(|e| e.begin_edit(&record))>
                    {icon("edit")}
                </button>
                <button class="action-button action-button--delete" title="Delete" on:click=move |_| on_delete.run(id)>
                    {icon("delete")}
                </button>
            </td>
        </tr>
    }
    .into_any()
}

/// Таблица операций с редактированием строки на месте
#[component]
pub fn TransactionsTable(vm: TransactionsViewModel) -> impl IntoView {
    let edit = RwSignal::new(EditState::default());
    let editing_id = Memo::new(move |_| edit.with(|e| e.editing_id()));
    let items = Memo::new(move |_| vm.items());
    let (edit_error, set_edit_error) = signal::<Option<String>>(None);

    let on_save = Callback::new(move |_: ()| match edit.with_untracked(|e| e.prepare_commit()) {
        Err(msg) => set_edit_error.set(Some(msg)),
        Ok((id, record)) => {
            set_edit_error.set(None);
            vm.mutate(
                move |sync| async move { sync.update(id, record).await },
                move |res| {
                    if res.is_ok() {
                        edit.update(|e| e.complete_commit(id));
                    }
                },
            );
        }
    });

    let on_delete = Callback::new(move |id: TransactionId| {
        vm.mutate(move |sync| async move { sync.delete(id).await }, |_| {});
    });

    view! {
        <div class="table-card">
            <h3 class="table-card__title">"Recent Transactions"</h3>
            {move || edit_error.get().map(|e| view! { <div class="form__error">{e}</div> })}
            <table class="table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Description"</th>
                        <th>"Amount ($)"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let editing = editing_id.get();
                        items
                            .get()
                            .into_iter()
                            .map(|tx| {
                                if editing == Some(tx.id) {
                                    edit_row(edit, on_save)
                                } else {
                                    read_row(tx, edit, on_delete)
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TransactionsPage() -> impl IntoView {
    let vm = TransactionsViewModel::new();
    let loading = Memo::new(move |_| vm.state.with(|s| s.loading));
    vm.refresh();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{format!("Manage {}", Transaction::list_name())}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| vm.refresh()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || vm.state.with(|s| s.error.clone()).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                    <button class="warning-box__close" on:click=move |_| vm.clear_error()>"×"</button>
                </div>
            })}

            <AddTransactionForm vm=vm />

            {move || {
                if loading.get() {
                    view! { <div class="placeholder">"Loading transactions..."</div> }.into_any()
                } else {
                    view! { <TransactionsTable vm=vm /> }.into_any()
                }
            }}
        </div>
    }
}
