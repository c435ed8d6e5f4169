use shared::SavingsPlan;
use yew::prelude::*;

const PROGRESS_FILL_COLOR: &str = "#27ae60";

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: SavingsPlan,
    pub on_join: Callback<SavingsPlan>,
}

/// Inline style for the progress fill. The width is not clamped, so plans
/// past their goal overflow the track.
pub fn progress_fill_style(plan: &SavingsPlan) -> String {
    format!(
        "width: {}%; background-color: {};",
        plan.progress_percent(),
        PROGRESS_FILL_COLOR
    )
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;

    let on_join_click = {
        let plan = plan.clone();
        let on_join = props.on_join.clone();
        Callback::from(move |_: MouseEvent| {
            on_join.emit(plan.clone());
        })
    };

    html! {
        <div class="plan-card">
            <h4>{&plan.title}</h4>
            <p>{&plan.description}</p>
            <p><strong>{"Goal:"}</strong>{format!(" Ksh {}", plan.goal)}</p>
            <p><strong>{"Current Savings:"}</strong>{format!(" Ksh {}", plan.current)}</p>
            <p><strong>{"Duration:"}</strong>{format!(" {}", plan.duration)}</p>
            <div class="progress">
                <div class="progress-bar" style={progress_fill_style(plan)}></div>
            </div>
            <p>{format!("{} of your goal achieved!", plan.progress_label())}</p>
            <button class="action-button" onclick={on_join_click}>
                {"Join This Plan"}
            </button>
        </div>
    }
}
