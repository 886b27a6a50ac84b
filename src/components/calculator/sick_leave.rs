//! Sick-leave benefit calculator view.

use leptos::{ev, prelude::*};

use super::field::{NumberField, ResultRow, css};
use super::{amount, amount_text, count};
use crate::app::AppContext;
use crate::config::storage::SICK_LEAVE_INPUT_KEY;
use crate::core::calc::calculate_sick_leave;
use crate::core::error::CalcError;
use crate::models::{SickLeaveInput, SickLeaveResult};
use crate::utils::{cache, format_money, format_percent};

/// Text state of the sick-leave form.
#[derive(Clone, Copy)]
struct SickLeaveForm {
    illness_year: RwSignal<String>,
    earnings_first_year: RwSignal<String>,
    earnings_second_year: RwSignal<String>,
    insurance_years: RwSignal<String>,
    sick_days: RwSignal<String>,
}

impl SickLeaveForm {
    fn new(input: SickLeaveInput) -> Self {
        Self {
            illness_year: RwSignal::new(input.illness_year.to_string()),
            earnings_first_year: RwSignal::new(amount_text(input.earnings_first_year)),
            earnings_second_year: RwSignal::new(amount_text(input.earnings_second_year)),
            insurance_years: RwSignal::new(input.insurance_years.to_string()),
            sick_days: RwSignal::new(input.sick_days.to_string()),
        }
    }

    fn read(&self) -> Result<SickLeaveInput, CalcError> {
        let year = self.illness_year.get_untracked();
        Ok(SickLeaveInput {
            illness_year: year
                .trim()
                .parse()
                .map_err(|_| CalcError::NotANumber("illness year"))?,
            earnings_first_year: amount(
                "first year earnings",
                &self.earnings_first_year.get_untracked(),
            )?,
            earnings_second_year: amount(
                "second year earnings",
                &self.earnings_second_year.get_untracked(),
            )?,
            insurance_years: count("insurance years", &self.insurance_years.get_untracked())?,
            sick_days: count("sick days", &self.sick_days.get_untracked())?,
        })
    }

    /// Labels of the two billing years, following the illness year field.
    fn billing_years(&self) -> (String, String) {
        billing_year_labels(&self.illness_year.get())
    }
}

fn billing_year_labels(illness_year: &str) -> (String, String) {
    match illness_year.trim().parse::<i32>() {
        Ok(year) => (
            format!("Earnings in {}, ₽", year - 2),
            format!("Earnings in {}, ₽", year - 1),
        ),
        Err(_) => (
            "Earnings two years before, ₽".to_string(),
            "Earnings the year before, ₽".to_string(),
        ),
    }
}

#[component]
pub fn SickLeaveCalculator() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let form = SickLeaveForm::new(cache::get(SICK_LEAVE_INPUT_KEY).unwrap_or_default());
    let outcome = RwSignal::new(None::<Result<SickLeaveResult, CalcError>>);
    let years = Memo::new(move |_| form.billing_years());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = form.read().and_then(|input| {
            cache::remember(SICK_LEAVE_INPUT_KEY, &input);
            calculate_sick_leave(&input)
        });
        match &result {
            Ok(_) => ctx.platform().notify_success(),
            Err(e) => log::debug!("sick leave form rejected: {}", e),
        }
        outcome.set(Some(result));
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <h2 class=css::title>"Sick leave"</h2>
            <NumberField label="Year of illness" value=form.illness_year inputmode="numeric" />
            <div class=css::pair>
                <NumberField label={move || years.get().0} value=form.earnings_first_year />
                <NumberField label={move || years.get().1} value=form.earnings_second_year />
            </div>
            <NumberField
                label="Insurance record, full years"
                value=form.insurance_years
                inputmode="numeric"
                hint="Use 0 for less than six months"
            />
            <NumberField label="Days of sick leave" value=form.sick_days inputmode="numeric" />
            <button class=css::submit type="submit">"Calculate"</button>

            {move || outcome.get().map(|result| match result {
                Ok(r) => view! {
                    <div class=css::result>
                        <ResultRow label="Average daily earnings" value={format_money(r.average_daily)} />
                        <ResultRow label="Coverage" value={format_percent(r.coverage)} />
                        <ResultRow label="Daily benefit" value={format_money(r.daily_benefit)} />
                        <ResultRow label="Paid by employer" value={format_money(r.employer_part)} />
                        <ResultRow label="Paid by social fund" value={format_money(r.fund_part)} />
                        <ResultRow label="Benefit" value={format_money(r.total)} />
                        <ResultRow label="Income tax (13%)" value={format_money(r.income_tax)} />
                        <ResultRow label="To be paid" value={format_money(r.net)} total=true />
                    </div>
                }.into_any(),
                Err(e) => view! { <p class=css::error>{e.to_string()}</p> }.into_any(),
            })}
        </form>
    }
}
