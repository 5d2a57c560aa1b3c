//! The HTML for the transaction form dialog.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, loading_spinner,
    },
    transaction::{TransactionDraft, TransactionKind},
};

/// The id of the element that holds the transaction form.
pub const INTAKE_DIALOG_ID: &str = "intake-dialog";

/// The id of the element that holds the form fields.
///
/// The fields are re-rendered when the kind of transaction changes so that the
/// category list matches the kind.
pub const FORM_FIELDS_ID: &str = "transaction-form-fields";

/// Render the transaction form dialog, or an empty placeholder if `draft` is
/// `None` (the form is closed).
pub fn intake_dialog(draft: Option<&TransactionDraft>) -> Markup {
    let Some(draft) = draft else {
        return html! { div id=(INTAKE_DIALOG_ID) {} };
    };

    html! {
        div
            id=(INTAKE_DIALOG_ID)
            class="fixed inset-0 z-40 flex items-center justify-center p-4 bg-gray-900/50"
        {
            div
                role="dialog"
                aria-modal="true"
                aria-labelledby="intake-dialog-title"
                class={ "w-full max-w-md " (CARD_STYLE) }
            {
                h2 id="intake-dialog-title" class="mb-4 text-xl font-bold" { "Add New Transaction" }

                form
                    hx-post=(endpoints::TRANSACTIONS_API)
                    hx-target="#alert-container"
                    hx-target-error="#alert-container"
                    hx-indicator="#indicator"
                    hx-disabled-elt="#submit-button"
                    class="space-y-4"
                {
                    (transaction_form_fields(draft))

                    div class="flex gap-2"
                    {
                        button
                            type="button"
                            hx-post=(endpoints::CANCEL_TRANSACTION)
                            hx-target={ "#" (INTAKE_DIALOG_ID) }
                            hx-swap="outerHTML"
                            class=(BUTTON_SECONDARY_STYLE)
                        {
                            "Cancel"
                        }

                        button
                            type="submit"
                            id="submit-button"
                            class=(BUTTON_PRIMARY_STYLE)
                        {
                            span id="indicator" class="inline htmx-indicator" { (loading_spinner()) }
                            " Add Transaction"
                        }
                    }
                }
            }
        }
    }
}

/// Render the fields of the transaction form filled in with the values from
/// `draft`.
pub fn transaction_form_fields(draft: &TransactionDraft) -> Markup {
    html! {
        div id=(FORM_FIELDS_ID) class="space-y-4"
        {
            fieldset class="space-y-2"
            {
                legend class=(FORM_LABEL_STYLE) { "Type" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    (kind_radio(TransactionKind::Income, draft.kind))
                    (kind_radio(TransactionKind::Expense, draft.kind))
                }
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        value=(draft.amount)
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select name="category" id="category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[draft.category.is_empty()] { "Select category" }

                    @for category in draft.kind.categories() {
                        option value=(category) selected[draft.category == *category]
                        {
                            (category)
                        }
                    }
                }
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Optional"
                    value=(draft.description)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(draft.date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }
    }
}

fn kind_radio(kind: TransactionKind, selected: TransactionKind) -> Markup {
    let id = format!("transaction-kind-{}", kind.as_str());

    html! {
        div class="flex items-center gap-3"
        {
            input
                name="kind"
                id=(id)
                type="radio"
                value=(kind.as_str())
                checked[kind == selected]
                hx-put=(endpoints::TRANSACTION_DRAFT)
                hx-trigger="change"
                hx-include="closest form"
                hx-target={ "#" (FORM_FIELDS_ID) }
                hx-swap="outerHTML"
                tabindex="0"
                class=(FORM_RADIO_INPUT_STYLE);

            label for=(id) class=(FORM_RADIO_LABEL_STYLE)
            {
                (kind.label())
            }
        }
    }
}
