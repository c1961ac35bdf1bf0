use yew::prelude::*;

fn stored_theme() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("theme").ok().flatten())
}

fn apply_theme(dark: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        let class_list = body.class_list();
        let _ = if dark {
            class_list.add_1("dark-mode")
        } else {
            class_list.remove_1("dark-mode")
        };
    }
}

/// Light/dark switch. The choice lives in localStorage under "theme" and is
/// applied as a `dark-mode` class on `<body>` so the stylesheet stays in
/// charge of the actual colors.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let is_dark = use_state(|| stored_theme().as_deref() == Some("dark"));

    {
        let dark = *is_dark;
        use_effect_with_deps(
            move |dark| {
                apply_theme(*dark);
                || ()
            },
            dark,
        );
    }

    let onclick = {
        let is_dark = is_dark.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*is_dark;
            if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten()) {
                let _ = storage.set_item("theme", if next { "dark" } else { "light" });
            }
            is_dark.set(next);
        })
    };

    html! {
        <button class="theme-toggle" onclick={onclick} aria-label="Toggle theme">
            <span class="theme-icon">{ if *is_dark { "☀️" } else { "🌙" } }</span>
        </button>
    }
}
