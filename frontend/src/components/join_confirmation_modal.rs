use shared::SavingsPlan;
use web_sys::MouseEvent;
use yew::prelude::*;

pub const NEXT_STEPS: [&str; 3] = [
    "Set up automatic contributions to your plan.",
    "Track your progress regularly to reach your goal.",
    "Check out exclusive offers for plan members.",
];

#[derive(Properties, PartialEq)]
pub struct JoinConfirmationModalProps {
    /// Most recently joined plan; the modal is hidden while this is `None`
    pub plan: Option<SavingsPlan>,
    pub on_close: Callback<()>,
}

#[function_component(JoinConfirmationModal)]
pub fn join_confirmation_modal(props: &JoinConfirmationModalProps) -> Html {
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let plan = match &props.plan {
        Some(plan) => plan,
        None => return html! {},
    };

    html! {
        <div class="confirmation-modal">
            <div class="modal-content">
                <h4>{"You've Joined the Plan!"}</h4>
                <p>
                    {"You have successfully joined the "}
                    <strong>{&plan.title}</strong>
                    {". Here are your next steps:"}
                </p>
                <ul>
                    {for NEXT_STEPS.iter().map(|step| html! { <li>{*step}</li> })}
                </ul>
                <button type="button" class="close-button" onclick={on_close_click}>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}
