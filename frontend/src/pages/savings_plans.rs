use shared::SavingsPlan;
use yew::prelude::*;

use crate::components::dashboard_layout::SAVINGS_PLANS_ANCHOR;
use crate::components::{DashboardLayout, DonutChart, JoinConfirmationModal, PlanCard, SavingsCalculator};
use crate::hooks::use_savings_plans::use_savings_plans;
use crate::services::{api::ApiClient, logging::Logger};
use crate::state::{RandomColorSource, SavingsPageAction, SavingsPageState};

#[derive(Properties, PartialEq)]
pub struct SavingsPlansPageProps {
    pub api_client: ApiClient,
}

#[function_component(SavingsPlansPage)]
pub fn savings_plans_page(props: &SavingsPlansPageProps) -> Html {
    let state = use_savings_plans(&props.api_client);
    let colors = use_mut_ref(RandomColorSource::default);

    let on_join = {
        let state = state.clone();
        Callback::from(move |plan: SavingsPlan| {
            Logger::debug_with_component(
                "savings-plans",
                &format!("Joined plan {} ({})", plan.id, plan.title),
            );
            let action = SavingsPageAction::join_with(plan, &mut *colors.borrow_mut());
            state.dispatch(action);
        })
    };

    let dispatch = {
        let state = state.clone();
        Callback::from(move |action: SavingsPageAction| state.dispatch(action))
    };

    html! {
        <SavingsPlansView state={(*state).clone()} {on_join} {dispatch} />
    }
}

#[derive(Properties, PartialEq)]
pub struct SavingsPlansViewProps {
    pub state: SavingsPageState,
    pub on_join: Callback<SavingsPlan>,
    pub dispatch: Callback<SavingsPageAction>,
}

/// Renders the page from a state snapshot. While loading only the loading
/// line is shown.
#[function_component(SavingsPlansView)]
pub fn savings_plans_view(props: &SavingsPlansViewProps) -> Html {
    let state = &props.state;

    if state.loading {
        return html! { <p>{"Loading savings plans..."}</p> };
    }

    let on_close_confirmation = props.dispatch.reform(|_: ()| SavingsPageAction::CloseConfirmation);
    let on_monthly_amount_change = props.dispatch.reform(SavingsPageAction::SetMonthlyAmount);
    let on_duration_change = props.dispatch.reform(SavingsPageAction::SetDuration);
    let on_calculate = props.dispatch.reform(|_: ()| SavingsPageAction::Calculate);

    html! {
        <DashboardLayout>
            <div id={SAVINGS_PLANS_ANCHOR} class="savings-plans-page">
                <h3>{"Savings Plans"}</h3>
                <p>{"Choose a savings plan that fits your goals and start saving today!"}</p>

                <div class="plans-list">
                    {for state.plans.iter().map(|plan| html! {
                        <PlanCard key={plan.id} plan={plan.clone()} on_join={props.on_join.clone()} />
                    })}
                </div>

                <div class="donut-chart">
                    <h3>{"Selected Savings Plans"}</h3>
                    <DonutChart data={state.chart.clone()} />
                </div>

                <SavingsCalculator
                    monthly_amount={state.calculator.monthly_amount_input()}
                    duration={state.calculator.duration_input()}
                    result_line={state.calculator.result_line()}
                    on_monthly_amount_change={on_monthly_amount_change}
                    on_duration_change={on_duration_change}
                    on_calculate={on_calculate}
                />

                <JoinConfirmationModal
                    plan={state.joining_plan.clone()}
                    on_close={on_close_confirmation}
                />
            </div>
        </DashboardLayout>
    }
}
