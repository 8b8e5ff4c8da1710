use std::rc::Rc;

use async_trait::async_trait;
use tracing::{debug, error};
use yew::prelude::*;

use ticketfall_core::{AnimatorConfig, HostBridge, ReelAnimator, SpinSource, Stage};
use ticketfall_shared::{ClientError, ClientResult, SpinClient, SpinResult, REEL_COUNT};

use crate::bridge::TelegramBridge;
use crate::dom::{DomReel, DomView};
use crate::timer::BrowserClock;

const SPIN_ENDPOINT: &str = match option_env!("SPIN_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "/spin",
};

type PageAnimator = ReelAnimator<PageSource, BrowserClock>;
type PageStage = Stage<DomReel, DomView, TelegramBridge>;

/// Spin client resolved against the page URL; an unusable endpoint fails each fetch.
struct PageSource {
    client: Result<SpinClient, String>,
}

impl PageSource {
    fn from_page() -> Self {
        let base = web_sys::window().and_then(|w| w.location().href().ok());
        let client = match base {
            Some(base) => SpinClient::with_base(&base, SPIN_ENDPOINT),
            None => SpinClient::new(SPIN_ENDPOINT),
        };
        Self {
            client: client.map_err(|e| e.to_string()),
        }
    }
}

#[async_trait(?Send)]
impl SpinSource for PageSource {
    async fn fetch(&self) -> ClientResult<SpinResult> {
        match &self.client {
            Ok(client) => client.spin().await,
            Err(e) => Err(ClientError::InvalidEndpoint(e.clone())),
        }
    }
}

fn build_animator() -> PageAnimator {
    let seed = js_sys::Date::now().to_string();
    ReelAnimator::new(
        AnimatorConfig::default(),
        PageSource::from_page(),
        BrowserClock,
        seed,
    )
}

fn build_stage(
    tracks: &[NodeRef; REEL_COUNT],
    button: &NodeRef,
    message: &NodeRef,
) -> Option<PageStage> {
    let [a, b, c] = tracks;
    Some(Stage {
        reels: [
            DomReel::new(a.cast()?),
            DomReel::new(b.cast()?),
            DomReel::new(c.cast()?),
        ],
        view: DomView::new(button.cast()?, message.cast()?),
        host: TelegramBridge::detect(),
    })
}

#[function_component(App)]
pub fn app() -> Html {
    let tracks = [use_node_ref(), use_node_ref(), use_node_ref()];
    let button = use_node_ref();
    let message = use_node_ref();
    let animator = use_memo((), |_| build_animator());
    let stage = use_mut_ref(|| None::<Rc<PageStage>>);

    {
        let tracks = tracks.clone();
        let button = button.clone();
        let message = message.clone();
        let animator = animator.clone();
        let stage = stage.clone();
        use_effect_with((), move |_| match build_stage(&tracks, &button, &message) {
            Some(built) => {
                built.host.expand();
                if let Err(e) = animator.init_tracks(&built) {
                    error!(error = %e, "failed to draw idle reels");
                }
                *stage.borrow_mut() = Some(Rc::new(built));
            }
            None => error!("reel elements missing after mount"),
        });
    }

    let onclick = {
        let animator = animator.clone();
        let stage = stage.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(stage) = stage.borrow().clone() else {
                return;
            };
            let animator = animator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = animator.spin(&*stage).await {
                    debug!(error = %e, "spin ended without a result");
                }
            });
        })
    };

    html! {
        <div class="slot">
            <div class="reels">
                { for tracks.iter().enumerate().map(|(i, track)| html! {
                    <div class="reel">
                        <div id={format!("track{}", i + 1)} class="track" ref={track.clone()}></div>
                    </div>
                }) }
            </div>
            <button id="spinBtn" ref={button} {onclick}>{"SPIN"}</button>
            <div id="result-message" ref={message}></div>
        </div>
    }
}
