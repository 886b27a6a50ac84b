//! Vacation pay calculator view.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::field::{NumberField, ResultRow, css};
use super::{amount, amount_text, count};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::storage::VACATION_INPUT_KEY;
use crate::core::calc::calculate_vacation;
use crate::core::error::CalcError;
use crate::models::{PartialMonth, VacationInput, VacationResult};
use crate::utils::{cache, format_money};

/// One editable partial month, keyed for `<For>`.
#[derive(Clone, Copy)]
struct PartialRow {
    id: usize,
    worked: RwSignal<String>,
    calendar: RwSignal<String>,
}

impl PartialRow {
    fn new(id: usize, worked: String, calendar: String) -> Self {
        Self {
            id,
            worked: RwSignal::new(worked),
            calendar: RwSignal::new(calendar),
        }
    }
}

/// Text state of the vacation form.
#[derive(Clone, Copy)]
struct VacationForm {
    earnings: RwSignal<String>,
    full_months: RwSignal<String>,
    partials: RwSignal<Vec<PartialRow>>,
    next_id: StoredValue<usize>,
    vacation_days: RwSignal<String>,
}

impl VacationForm {
    fn new(input: VacationInput) -> Self {
        let mut rows: Vec<PartialRow> = input
            .partial_months
            .iter()
            .enumerate()
            .map(|(id, p)| {
                PartialRow::new(id, p.worked_days.to_string(), p.calendar_days.to_string())
            })
            .collect();
        if rows.is_empty() {
            rows.push(PartialRow::new(0, String::new(), String::new()));
        }

        Self {
            earnings: RwSignal::new(amount_text(input.earnings)),
            full_months: RwSignal::new(input.full_months.to_string()),
            next_id: StoredValue::new(rows.len()),
            partials: RwSignal::new(rows),
            vacation_days: RwSignal::new(input.vacation_days.to_string()),
        }
    }

    fn add_partial(&self) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.partials
            .update(|rows| rows.push(PartialRow::new(id, String::new(), String::new())));
    }

    fn remove_partial(&self, id: usize) {
        self.partials.update(|rows| rows.retain(|row| row.id != id));
    }

    fn read(&self) -> Result<VacationInput, CalcError> {
        let rows: Vec<(String, String)> = self
            .partials
            .get_untracked()
            .iter()
            .map(|row| (row.worked.get_untracked(), row.calendar.get_untracked()))
            .collect();

        Ok(VacationInput {
            earnings: amount("earnings", &self.earnings.get_untracked())?,
            full_months: count("full months", &self.full_months.get_untracked())?,
            partial_months: partial_months(
                rows.iter().map(|(w, c)| (w.as_str(), c.as_str())),
            )?,
            vacation_days: count("vacation days", &self.vacation_days.get_untracked())?,
        })
    }
}

/// A partial month row; both fields empty means the row is unused.
fn partial_month(worked: &str, calendar: &str) -> Result<Option<PartialMonth>, CalcError> {
    if worked.trim().is_empty() && calendar.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(PartialMonth {
        worked_days: count("worked days", worked)?,
        calendar_days: count("days in month", calendar)?,
    }))
}

fn partial_months<'a>(
    rows: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<Vec<PartialMonth>, CalcError> {
    rows.into_iter()
        .filter_map(|(worked, calendar)| partial_month(worked, calendar).transpose())
        .collect()
}

#[component]
pub fn VacationCalculator() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let form = VacationForm::new(cache::get(VACATION_INPUT_KEY).unwrap_or_default());
    let outcome = RwSignal::new(None::<Result<VacationResult, CalcError>>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = form.read().and_then(|input| {
            cache::remember(VACATION_INPUT_KEY, &input);
            calculate_vacation(&input)
        });
        match &result {
            Ok(_) => ctx.platform().notify_success(),
            Err(e) => log::debug!("vacation form rejected: {}", e),
        }
        outcome.set(Some(result));
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <h2 class=css::title>"Vacation pay"</h2>
            <NumberField
                label="Earnings over the last 12 months, ₽"
                value=form.earnings
                hint="Accrued pay, excluding sick leave and previous vacation pay"
            />
            <NumberField label="Fully worked months" value=form.full_months inputmode="numeric" />
            <For
                each=move || form.partials.get()
                key=|row| row.id
                children=move |row| view! {
                    <div class=css::partial>
                        <NumberField label="Partial month: worked days" value=row.worked inputmode="numeric" />
                        <NumberField label="Days in that month" value=row.calendar inputmode="numeric" />
                        <button
                            class=css::remove
                            type="button"
                            aria-label="Remove partial month"
                            on:click=move |_| form.remove_partial(row.id)
                        >
                            <Icon icon=ic::REMOVE />
                        </button>
                    </div>
                }
            />
            <button class=css::add type="button" on:click=move |_| form.add_partial()>
                <Icon icon=ic::ADD />
                "Add partial month"
            </button>
            <NumberField label="Vacation days" value=form.vacation_days inputmode="numeric" />
            <button class=css::submit type="submit">"Calculate"</button>

            {move || outcome.get().map(|result| match result {
                Ok(r) => view! {
                    <div class=css::result>
                        <ResultRow label="Billing days" value={format!("{:.2}", r.billing_days)} />
                        <ResultRow label="Average daily earnings" value={format_money(r.average_daily)} />
                        <ResultRow label="Vacation pay" value={format_money(r.gross)} />
                        <ResultRow label="Income tax (13%)" value={format_money(r.income_tax)} />
                        <ResultRow label="To be paid" value={format_money(r.net)} total=true />
                    </div>
                }.into_any(),
                Err(e) => view! { <p class=css::error>{e.to_string()}</p> }.into_any(),
            })}
        </form>
    }
}
