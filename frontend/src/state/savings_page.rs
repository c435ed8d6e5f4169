use std::rc::Rc;

use shared::SavingsPlan;
use yew::Reducible;

use super::calculator::CalculatorState;
use super::chart_data::ChartData;
use super::color_source::ColorSource;

/// Everything the savings plans page renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsPageState {
    pub plans: Vec<SavingsPlan>,
    pub loading: bool,
    /// Plan shown in the confirmation overlay; `None` hides the overlay
    pub joining_plan: Option<SavingsPlan>,
    /// Every join in order, duplicates included
    pub selected_plans: Vec<SavingsPlan>,
    pub chart: ChartData,
    pub calculator: CalculatorState,
}

impl Default for SavingsPageState {
    fn default() -> Self {
        Self {
            plans: Vec::new(),
            loading: true,
            joining_plan: None,
            selected_plans: Vec::new(),
            chart: ChartData::default(),
            calculator: CalculatorState::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SavingsPageAction {
    PlansLoaded(Result<Vec<SavingsPlan>, String>),
    Join { plan: SavingsPlan, color: String },
    CloseConfirmation,
    SetMonthlyAmount(String),
    SetDuration(String),
    Calculate,
}

impl SavingsPageAction {
    /// Join action with the slice color drawn from `colors`.
    pub fn join_with(plan: SavingsPlan, colors: &mut dyn ColorSource) -> Self {
        let color = colors.next_color();
        SavingsPageAction::Join { plan, color }
    }
}

impl SavingsPageState {
    /// Settle the initial load. A failure leaves the list empty.
    pub fn plans_loaded(&mut self, result: Result<Vec<SavingsPlan>, String>) {
        if let Ok(plans) = result {
            self.plans = plans;
        }
        self.loading = false;
    }

    /// Join a plan: open the overlay, record the selection, add a chart slice.
    /// Joining the same plan again adds another entry.
    pub fn join(&mut self, plan: SavingsPlan, color: String) {
        self.chart.push(plan.title.clone(), plan.current, color);
        self.selected_plans.push(plan.clone());
        self.joining_plan = Some(plan);
    }

    pub fn close_confirmation(&mut self) {
        self.joining_plan = None;
    }

    pub fn apply(&mut self, action: SavingsPageAction) {
        match action {
            SavingsPageAction::PlansLoaded(result) => self.plans_loaded(result),
            SavingsPageAction::Join { plan, color } => self.join(plan, color),
            SavingsPageAction::CloseConfirmation => self.close_confirmation(),
            SavingsPageAction::SetMonthlyAmount(input) => self.calculator.set_monthly_amount(&input),
            SavingsPageAction::SetDuration(input) => self.calculator.set_duration(&input),
            SavingsPageAction::Calculate => self.calculator.calculate(),
        }
    }
}

impl Reducible for SavingsPageState {
    type Action = SavingsPageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
