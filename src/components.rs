//! Yew components for the activity board page.
//!
//! DOM ids the stylesheet and server template rely on:
//! activities-list, signup-form, email, activity, message.

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::HttpApi;
use crate::banner::BrowserScheduler;
use crate::board::{BoardAction, BoardController, BoardState};
use crate::config::BoardConfig;
use crate::render::{
    render_banner, render_list, CardView, ListView, ParticipantRow, NO_PARTICIPANTS_TEXT,
};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: BoardConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_reducer(BoardState::default);

    let controller = {
        let dispatcher = state.dispatcher();
        use_memo(props.config.clone(), move |cfg| {
            BoardController::new(
                HttpApi::new(cfg.api_base.clone()),
                BrowserScheduler,
                cfg.message_timeout_ms,
                move |action| dispatcher.dispatch(action),
            )
        })
    };

    // Initial load
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                controller.load_activities().await;
            });
            || ()
        });
    }

    let on_unsubscribe = {
        let controller = controller.clone();
        Callback::from(move |row: ParticipantRow| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.handle_unsubscribe(&row.email, &row.activity).await;
            });
        })
    };

    let on_submit = {
        let controller = controller.clone();
        let form = state.form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let controller = controller.clone();
            let form = form.clone();
            spawn_local(async move {
                controller.handle_signup(&form.email, &form.activity).await;
            });
        })
    };

    let on_email = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(BoardAction::EmailChanged(input.value()));
        })
    };

    // Keep the select in step with the form after reloads and resets.
    let select_ref = use_node_ref();
    {
        let select_ref = select_ref.clone();
        let deps = (state.form.activity.clone(), state.options.clone());
        use_effect_with(deps, move |(activity, _)| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value(activity);
            }
            || ()
        });
    }

    let on_activity = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(BoardAction::ActivityChanged(select.value()));
        })
    };

    let list = match render_list(&state.list) {
        ListView::Notice(text) => html! { <p>{ text }</p> },
        ListView::Cards(cards) => cards
            .into_iter()
            .map(|card| {
                let key = card.name.clone();
                html! {
                    <ActivityCard
                        key={key}
                        card={card}
                        on_unsubscribe={on_unsubscribe.clone()}
                    />
                }
            })
            .collect::<Html>(),
    };

    let banner = render_banner(&state.banner);

    html! {
      <>
        <header>
          <h1>{ props.config.title.clone() }</h1>
          <h2>{ "Extracurricular Activities" }</h2>
        </header>

        <main>
          <section id="activities-container">
            <h3>{ "Available Activities" }</h3>
            <div id="activities-list">{ list }</div>
          </section>

          <section id="signup-container">
            <h3>{ "Sign Up for an Activity" }</h3>
            <form id="signup-form" onsubmit={on_submit}>
              <div class="form-group">
                <label for="email">{ "Student Email:" }</label>
                <input
                  type="email"
                  id="email"
                  required=true
                  placeholder="your-email@mergington.edu"
                  value={state.form.email.clone()}
                  oninput={on_email}
                />
              </div>
              <div class="form-group">
                <label for="activity">{ "Select Activity:" }</label>
                <select id="activity" required=true ref={select_ref} onchange={on_activity}>
                  { for state.options.iter().map(|name| html! {
                      <option value={name.clone()}>{ name.clone() }</option>
                  }) }
                </select>
              </div>
              <button type="submit">{ "Sign Up" }</button>
            </form>
            <div id="message" class={banner.class}>{ banner.text }</div>
          </section>
        </main>
      </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub card: CardView,
    pub on_unsubscribe: Callback<ParticipantRow>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let card = &props.card;

    let participants = if card.has_participants() {
        html! {
          <ul class="participants">
            { for card.participants.iter().map(|row| {
                let onclick = {
                    let row = row.clone();
                    props.on_unsubscribe.reform(move |_: MouseEvent| row.clone())
                };
                html! {
                  <li>
                    { row.email.clone() }
                    { " " }
                    <button
                      class="remove-participant"
                      data-email={row.email.clone()}
                      data-activity={row.activity.clone()}
                      title="Unsubscribe"
                      onclick={onclick}
                    >
                      { "×" }
                    </button>
                  </li>
                }
            }) }
          </ul>
        }
    } else {
        html! { <p class="no-participants">{ NO_PARTICIPANTS_TEXT }</p> }
    };

    html! {
      <div class="activity-card">
        <h4>{ card.name.clone() }</h4>
        <p>{ card.description.clone() }</p>
        <p><strong>{ "Schedule:" }</strong>{ format!(" {}", card.schedule) }</p>
        <p><strong>{ "Availability:" }</strong>{ format!(" {}", card.availability_text()) }</p>
        <p><strong>{ "Participants:" }</strong></p>
        { participants }
      </div>
    }
}
