use yew::prelude::*;
use yew_router::prelude::*;

use crate::contact::ContactForm;
use crate::theme::ThemeToggle;
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    // Navigating from the menu collapses it, like tapping a link on mobile.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <div class="landing-page">
            <header class="header">
                <div class="header-inner">
                    <a class="logo" href="#top">{"Clearpath"}</a>
                    <nav class={classes!("nav", (*menu_open).then_some("active"))}>
                        <a class="nav-link" href="#benefits" onclick={close_menu.clone()}>{"Benefits"}</a>
                        <a class="nav-link" href="#how-it-works" onclick={close_menu.clone()}>{"How it works"}</a>
                        <Link<Route> classes="nav-link" to={Route::Faq}>{"FAQ"}</Link<Route>>
                        <a class="nav-link" href="#contact" onclick={close_menu}>{"Contact"}</a>
                    </nav>
                    <ThemeToggle />
                    <button
                        class={classes!("mobile-toggle", (*menu_open).then_some("active"))}
                        onclick={toggle_menu}
                        aria-label="Toggle navigation"
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>

            <main id="top">
                <section class="hero">
                    <h1>{"Operations consulting that pays for itself"}</h1>
                    <p class="hero-subtitle">
                        {"We help growing companies untangle their processes, cut waste, and get back to the work that matters."}
                    </p>
                    <a class="hero-cta" href="#contact">{"Talk to us"}</a>
                </section>

                <section id="benefits" class="benefits">
                    <h2>{"Why teams choose us"}</h2>
                    <div class="benefit-grid">
                        <div class="benefit-card">
                            <h3>{"Fast diagnosis"}</h3>
                            <p>{"A full picture of where your operation loses time and money, delivered in the first two weeks."}</p>
                        </div>
                        <div class="benefit-card">
                            <h3>{"Hands-on execution"}</h3>
                            <p>{"We do not leave you with a slide deck. Our consultants work inside your team until the changes stick."}</p>
                        </div>
                        <div class="benefit-card">
                            <h3>{"No lock-in"}</h3>
                            <p>{"Month-to-month engagements. If we stop being useful, you stop paying."}</p>
                        </div>
                    </div>
                </section>

                <section id="how-it-works" class="steps">
                    <h2>{"How it works"}</h2>
                    <div class="step-card">
                        <span class="step-number">{"1"}</span>
                        <p>{"Send us a contact request with a few words about your company."}</p>
                    </div>
                    <div class="step-card">
                        <span class="step-number">{"2"}</span>
                        <p>{"We schedule a free consultation and map out your biggest bottleneck."}</p>
                    </div>
                    <div class="step-card">
                        <span class="step-number">{"3"}</span>
                        <p>{"You get a plan with clear costs and we start executing together."}</p>
                    </div>
                </section>

                <section id="contact" class="contact-section">
                    <h2>{"Request a consultation"}</h2>
                    <p>{"Fill in the form and our team will get in touch."}</p>
                    <ContactForm />
                </section>
            </main>

            <footer class="footer">
                <p>{"© 2025 Clearpath. All rights reserved."}</p>
            </footer>
        </div>
    }
}
