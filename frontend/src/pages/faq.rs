use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub id: String,
    pub is_open: bool,
    pub on_toggle: Callback<String>,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = props.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id.clone());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if props.is_open { "−" } else { "+" } }</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

/// Accordion: at most one item is open, and opening another closes it.
#[function_component(Faq)]
pub fn faq() -> Html {
    let open_item = use_state(|| None::<String>);

    let on_toggle = {
        let open_item = open_item.clone();
        Callback::from(move |id: String| {
            if open_item.as_deref() == Some(id.as_str()) {
                open_item.set(None);
            } else {
                open_item.set(Some(id));
            }
        })
    };
    let is_open = |id: &str| open_item.as_deref() == Some(id);

    html! {
        <main class="faq-page">
            <section class="faq-section">
                <h1>{"Frequently Asked Questions"}</h1>
                <FaqItem
                    question="How quickly does your team respond to a request?"
                    id="response-time"
                    is_open={is_open("response-time")}
                    on_toggle={on_toggle.clone()}
                >
                    <p>{"We reply to every contact request within one business day, usually sooner."}</p>
                </FaqItem>
                <FaqItem
                    question="Do you work with small businesses?"
                    id="small-businesses"
                    is_open={is_open("small-businesses")}
                    on_toggle={on_toggle.clone()}
                >
                    <p>{"Yes. Most of our clients are small and mid-sized companies, and the first consultation is free."}</p>
                </FaqItem>
                <FaqItem
                    question="Is there a long-term contract?"
                    id="contract"
                    is_open={is_open("contract")}
                    on_toggle={on_toggle.clone()}
                >
                    <p>{"No. Engagements are month to month and you can stop whenever you want."}</p>
                </FaqItem>
                <FaqItem
                    question="What happens after I send the contact form?"
                    id="after-contact"
                    is_open={is_open("after-contact")}
                    on_toggle={on_toggle}
                >
                    <p>{"Your request lands directly with our team. Someone will reach out using the details you provided to schedule a conversation."}</p>
                </FaqItem>
            </section>
        </main>
    }
}
