//! Funding panel: contract progress plus wallet connect and fund actions.

use std::cell::RefCell;
use std::rc::Rc;

use funding_core::display::{format_progress, format_raised, format_target};
use funding_core::{
    FundingConfig, FundingError, FundingReader, FundingSnapshot, FundingState, Polling,
    RefreshSequencer, connect_wallet, fund_project,
};
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{Button, Card, CardContent, CardHeader, CardTitle, Input, Progress};
use crate::rpc::GlooTransport;
use crate::timer::GlooTimer;
use crate::wallet::InjectedProvider;

type Reader = FundingReader<GlooTransport>;

/// Panel state held in a reducer so async results never act on a stale copy.
#[derive(Debug, Clone, PartialEq, Default)]
struct PanelState(FundingState);

enum PanelAction {
    Apply(FundingSnapshot),
    SetAmount(String),
    ClearAmount,
}

impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            PanelAction::Apply(snapshot) => next.apply(snapshot),
            PanelAction::SetAmount(amount) => next.amount_input = amount,
            PanelAction::ClearAmount => next.clear_amount(),
        }
        Rc::new(Self(next))
    }
}

/// Read both contract values and apply them unless a newer refresh already landed.
///
/// Failures are logged and leave the displayed values untouched.
async fn refresh(
    reader: Rc<Reader>,
    sequencer: Rc<RefCell<RefreshSequencer>>,
    dispatcher: UseReducerDispatcher<PanelState>,
) {
    let ticket = sequencer.borrow_mut().begin();
    match reader.fetch_snapshot().await {
        Ok(snapshot) => {
            if sequencer.borrow_mut().accept(ticket) {
                dispatcher.dispatch(PanelAction::Apply(snapshot));
            } else {
                debug!("Discarding stale refresh {:?}", ticket);
            }
        }
        Err(e) => error!("Fetch contract data error: {}", e),
    }
}

/// Funding panel component.
#[function_component(DemoFunding)]
pub fn demo_funding() -> Html {
    let config = use_memo((), |_| FundingConfig::default());
    let reader = {
        let config = config.clone();
        use_memo((), move |_| {
            FundingReader::new(
                GlooTransport::new(config.rpc_url.clone()),
                config.contract_address.clone(),
            )
        })
    };
    let sequencer = use_mut_ref(RefreshSequencer::new);
    let state = use_reducer(PanelState::default);

    // Refresh on mount and on every tick; stop polling on unmount.
    {
        let reader = reader.clone();
        let sequencer = sequencer.clone();
        let dispatcher = state.dispatcher();
        let period = config.poll_interval_ms;

        use_effect_with((), move |_| {
            let tick = move || {
                spawn_local(refresh(reader.clone(), sequencer.clone(), dispatcher.clone()));
            };
            let mut polling = Polling::start(&GlooTimer, period, tick);
            move || polling.stop()
        });
    }

    let on_connect = Callback::from(|_: MouseEvent| {
        spawn_local(async {
            let wallet = InjectedProvider::detect();
            if let Err(e) = connect_wallet(wallet.as_ref()).await {
                error!("Error connecting wallet: {}", e);
            }
        });
    });

    let on_amount_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |amount: String| dispatcher.dispatch(PanelAction::SetAmount(amount)))
    };

    let on_fund = {
        let reader = reader.clone();
        let sequencer = sequencer.clone();
        let dispatcher = state.dispatcher();
        let amount = state.0.amount_input.clone();

        Callback::from(move |_: MouseEvent| {
            let reader = reader.clone();
            let sequencer = sequencer.clone();
            let dispatcher = dispatcher.clone();
            let amount = amount.clone();

            spawn_local(async move {
                let wallet = InjectedProvider::detect();
                let outcome = fund_project(wallet.as_ref(), reader.contract(), &amount).await;
                match outcome {
                    Ok(_) => {
                        refresh(reader, sequencer, dispatcher.clone()).await;
                        dispatcher.dispatch(PanelAction::ClearAmount);
                    }
                    Err(e @ (FundingError::EmptyAmount | FundingError::NoProvider)) => {
                        debug!("Funding skipped: {}", e);
                    }
                    Err(e) => error!("Error funding project: {}", e),
                }
            });
        })
    };

    let panel = &state.0;

    html! {
        <Card class={classes!("w-full", "max-w-xl", "mx-auto", "mt-8", "bg-gray-100")}>
            <CardHeader>
                <CardTitle>{"Demo Project Funding"}</CardTitle>
            </CardHeader>
            <CardContent class="space-y-6">
                <div>
                    <p class="text-sm font-medium mb-2">
                        { format!("Contract Address: {}", config.contract_address) }
                    </p>
                    <Button onclick={on_connect} class="w-full">
                        {"Connect Wallet"}
                    </Button>
                </div>

                <div class="space-y-4">
                    <div>
                        <p class="text-sm mb-2">
                            { format!("Progress: {}%", format_progress(panel.progress_percent)) }
                        </p>
                        <Progress value={panel.progress_percent} class="w-full" />
                    </div>

                    <div>
                        <p class="text-sm">
                            { format!("Funds Raised: {} ETH", format_raised(panel.funds_raised)) }
                        </p>
                        <p class="text-sm">
                            { format!("Target: {} ETH", format_target(panel.funds_needed)) }
                        </p>
                    </div>

                    <div class="space-y-2">
                        <Input
                            input_type="number"
                            placeholder="Amount in ETH"
                            value={panel.amount_input.clone()}
                            oninput={on_amount_input}
                        />
                        <Button onclick={on_fund} class="w-full">
                            {"Fund Project"}
                        </Button>
                    </div>
                </div>
            </CardContent>
        </Card>
    }
}
