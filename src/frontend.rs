use std::rc::Rc;
use web_sys::{window, HtmlInputElement, InputEvent, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::catalog::{Catalog, ProjectRecord};
use crate::config::{ListenerConfig, NAVBAR_ID, PALETTE_ID, PROJECTS_REGION_ID, SEARCH_FIELD_ID};
use crate::content::{self, Job};
use crate::controller::{handle_palette_key, ActionSink, Controller};
use crate::state::{ViewAction, ViewState};
use crate::web::WebEnvironment;

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

fn load_catalog() -> Catalog {
    match Catalog::builtin() {
        Ok(catalog) => {
            tracing::info!(projects = catalog.len(), "project catalog loaded");
            catalog
        }
        Err(error) => {
            tracing::error!(%error, "project catalog unavailable");
            Catalog::default()
        }
    }
}

fn max_log_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: ProjectRecord,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let external = project.has_destination();

    html! {
        <a
            class="card project tilt"
            href={project.link.clone()}
            target={external.then_some("_blank")}
            rel={external.then_some("noreferrer")}
        >
            <div class="project-top">
                <span class="badge soft">{project.category.clone()}</span>
                <span class="muted">{project.year}</span>
            </div>
            <h3>{project.title.clone()}</h3>
            <p class="muted">{project.description.clone()}</p>
            <div class="tag-row">
                { for project.tags.iter().map(|tag| html! { <span key={tag.clone()} class="tag">{tag.clone()}</span> }) }
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct CommandPaletteProps {
    on_key: Callback<(String, String)>,
}

#[function_component(CommandPalette)]
fn command_palette(props: &CommandPaletteProps) -> Html {
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with((), move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
            || ()
        });
    }

    let onkeydown = {
        let on_key = props.on_key.clone();
        Callback::from(move |event: KeyboardEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_key.emit((event.key(), input.value()));
        })
    };

    html! {
        <div class="palette-overlay">
            <div id={PALETTE_ID} class="palette card" role="dialog" aria-label="Command palette">
                <input
                    ref={input_ref}
                    class="form-control palette-input"
                    placeholder={content::PALETTE_PLACEHOLDER}
                    onkeydown={onkeydown}
                />
                <div class="palette-hints muted">
                    {"Try: "}
                    { for content::PALETTE_HINTS.iter().enumerate().map(|(index, hint)| html! {
                        <>
                            {if index > 0 { " • " } else { "" }}
                            <code>{*hint}</code>
                        </>
                    }) }
                </div>
            </div>
        </div>
    }
}

fn job_entry(job: &Job) -> Html {
    html! {
        <article class="timeline-item card">
            <div class="timeline-dot" />
            <div class="timeline-body">
                <header class="timeline-header">
                    <h3>{job.role}{" "}<span class="muted">{format!("@ {}", job.org)}</span></h3>
                    <div class="muted">{job.period}</div>
                </header>
                <ul class="bullet-list">
                    { for job.points.iter().map(|point| html! { <li>{*point}</li> }) }
                </ul>
            </div>
        </article>
    }
}

fn pills(items: &[&'static str]) -> Html {
    html! {
        <div class="pill-row">
            { for items.iter().map(|item| html! { <span key={*item} class="pill">{*item}</span> }) }
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let state = use_reducer(ViewState::default);
    let catalog = use_memo((), |_| load_catalog());
    let environment = use_memo((), |_| WebEnvironment);

    let sink: ActionSink = {
        let dispatcher = state.dispatcher();
        Rc::new(move |action| dispatcher.dispatch(action))
    };

    {
        let environment = environment.clone();
        let sink = sink.clone();
        use_effect_with((), move |_| {
            let controller = Controller::mount(environment, sink, ListenerConfig::default());
            move || controller.unmount()
        });
    }

    let visible = {
        let catalog = catalog.clone();
        use_memo(
            (
                state.selected_category().to_string(),
                state.query_text().to_string(),
            ),
            move |(category, query)| {
                catalog
                    .filter(category, query)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            },
        )
    };

    let dispatch = |action: ViewAction| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action.clone()))
    };

    let on_query = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            dispatcher.dispatch(ViewAction::SetQuery(input.value()));
        })
    };

    let on_accent = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            dispatcher.dispatch(ViewAction::SetAccentColor(input.value()));
        })
    };

    let on_palette_key = {
        let environment = environment.clone();
        let sink = sink.clone();
        Callback::from(move |(key, text): (String, String)| {
            handle_palette_key(&*environment, &sink, &key, &text);
        })
    };

    let theme = state.theme();
    let root_style = format!("--accent: {};", state.accent_color());

    html! {
        <div
            class={classes!("site", theme.class_name(), state.has_loaded().then_some("loaded"))}
            data-theme={theme.as_str()}
            style={root_style}
        >
            <div class="bg-blobs" aria-hidden="true">
                <div class="blob" />
                <div class="blob" />
                <div class="blob" />
            </div>

            <nav id={NAVBAR_ID} class="navbar">
                <div class="navbar1">
                    <div class="brand">
                        <span class="brand-badge">{content::OWNER_INITIALS}</span>
                        <span class="brand-name">{content::OWNER_NAME}</span>
                    </div>

                    <button
                        class="mobile-menu-toggle"
                        type="button"
                        aria-label="Toggle menu"
                        aria-expanded={state.mobile_menu_open().to_string()}
                        onclick={dispatch(ViewAction::ToggleMobileMenu)}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>

                    <div class={classes!("nav-actions", state.mobile_menu_open().then_some("mobile-open"))}>
                        { for content::NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} class="nav-link">{*label}</a>
                        }) }
                        <button
                            class="btn btn-outline"
                            type="button"
                            aria-label="Toggle theme"
                            aria-pressed={theme.pressed().to_string()}
                            onclick={dispatch(ViewAction::ToggleTheme)}
                        >
                            {theme.toggle_label()}
                        </button>
                    </div>
                </div>
            </nav>

            <header class="hero container-xl">
                <div class="hero-copy">
                    <div class="hero-badge">{content::ROLE_BADGE}</div>
                    <h1>
                        {"Building "}<span class="accent-underline">{"user-friendly"}</span>{" applications"}
                        <br />{" with modern web technologies."}
                    </h1>
                    <p class="lead">
                        {"Full-stack developer focused on creating responsive, efficient web applications using React, Node.js, and cloud platforms."}
                    </p>
                    <div class="cta-row">
                        <a href={content::RESUME_URI} class="btn btn-lg btn-primary">{"View Resume"}</a>
                        <a href="#contact" class="btn btn-lg btn-outline">{"Hire Me"}</a>
                    </div>
                    <div class="quick-stats">
                        { for content::QUICK_STATS.iter().map(|(value, label)| html! {
                            <div class="stat"><span>{*value}</span>{" "}{*label}</div>
                        }) }
                    </div>
                </div>
                <div class="hero-card tilt">
                    <ul class="hero-highlights">
                        { for content::HIGHLIGHTS.iter().map(|(icon, title, detail)| html! {
                            <li>{*icon}{" "}<strong>{*title}</strong>{" "}{*detail}</li>
                        }) }
                    </ul>
                </div>
            </header>

            <section id="about" class="section container-xl">
                <div class="row g-4 align-center">
                    <div class="col col-6 col-md-12 aboutone">
                        <h2>{"About Me"}</h2>
                        <p>{content::ABOUT}</p>
                        {pills(&content::ABOUT_PILLS)}
                    </div>
                    <div class="col col-6 col-md-12">
                        <div class="card luxe">
                            <h3 class="mb-2">{"What I Bring"}</h3>
                            <ul class="checklist">
                                { for content::STRENGTHS.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                            <div class="row g-3 mt-3">
                                { for content::METRICS.iter().map(|metric| html! {
                                    <div class="col col-6 col-sm-12">
                                        <div class="metric">
                                            <span class="metric-num">
                                                if metric.rising {
                                                    <span class="up">{"▲"}</span>
                                                } else {
                                                    <span class="down">{"▼"}</span>
                                                }
                                                {" "}{metric.value}
                                            </span>
                                            <span class="metric-label">{metric.label}</span>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section id="experience" class="section container-xl">
                <h2>{"Experience"}</h2>
                <div class="timeline">
                    { for content::EXPERIENCE.iter().map(job_entry) }
                </div>
            </section>

            <section id="skills" class="section container-xl">
                <h2>{"Skills"}</h2>
                <div class="row g-4">
                    { for content::SKILLS.iter().map(|(name, level)| html! {
                        <div class="col col-6 col-md-12">
                            <div class="skill">
                                <div class="skill-head">
                                    <strong>{*name}</strong>
                                    <span class="muted">{format!("{level}%")}</span>
                                </div>
                                <div class="progress">
                                    <div class="progress-bar" style={format!("width: {level}%;")} />
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="row g-4 mt-4">
                    <div class="col col-6 col-md-12">
                        <h3>{"Tools/Software"}</h3>
                        {pills(&content::TOOLS)}
                    </div>
                    <div class="col col-6 col-md-12">
                        <h3>{"Languages"}</h3>
                        {pills(&content::LANGUAGES)}
                    </div>
                </div>
            </section>

            <section id={PROJECTS_REGION_ID} class="section container-xl">
                <div class="row align-center between projectsector mb-3">
                    <h2 class="col">{"Projects"}</h2>
                    <div class="col col-6 col-md-12 text-right">
                        <input
                            id={SEARCH_FIELD_ID}
                            class="form-control"
                            type="search"
                            placeholder="Search ( / )"
                            value={state.query_text().to_string()}
                            oninput={on_query}
                        />
                    </div>
                </div>

                <div class="category-pills" role="radiogroup" aria-label="Project category">
                    { for catalog.categories().into_iter().map(|category| {
                        let selected = category == state.selected_category();
                        html! {
                            <button
                                key={category}
                                type="button"
                                role="radio"
                                aria-checked={selected.to_string()}
                                class={classes!("pill", selected.then_some("selected"))}
                                onclick={dispatch(ViewAction::SetCategory(category.to_string()))}
                            >
                                {category}
                            </button>
                        }
                    }) }
                </div>

                <div class="grid">
                    { for visible.iter().map(|project| html! {
                        <ProjectCard key={project.id} project={project.clone()} />
                    }) }
                </div>
                if visible.is_empty() {
                    <p class="muted empty-state">{"No projects match the current filter."}</p>
                }
            </section>

            <section id="awards" class="section container-xl">
                <h2>{"Education & Certifications"}</h2>
                <div class="row g-4 educ">
                    <div class="col col-6 col-md-12">
                        <div class="card luxe">
                            <h3>{"Education"}</h3>
                            <div class="timeline-item">
                                <h4>{content::EDUCATION.degree}</h4>
                                <div class="muted">{content::EDUCATION.school}</div>
                                <div class="muted">{content::EDUCATION.period}</div>
                            </div>
                        </div>
                    </div>
                    <div class="col col-6 col-md-12">
                        <div class="card luxe">
                            <h3>{"Certifications"}</h3>
                            <ul class="checklist">
                                { for content::CERTIFICATIONS.iter().map(|certification| html! {
                                    <li>
                                        {certification.name}
                                        <br />
                                        if let Some(uri) = certification.certificate_uri {
                                            <a
                                                href={uri}
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="btn btn-sm btn-primary mt-2"
                                            >
                                                {"View Certificate"}
                                            </a>
                                        }
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </div>
                </div>
                <div class="card luxe mt-4">
                    <h3>{"Hobbies"}</h3>
                    {pills(&content::HOBBIES)}
                </div>
            </section>

            <section id="contact" class="section container-xl">
                <div class="row g-4 align-center">
                    <div class="col col-6 col-md-12">
                        <h2>{"Contact"}</h2>
                        <p class="muted">{content::CONTACT_BLURB}</p>
                        <div class="row g-3 mt-2 condact">
                            <div class="col col-6 col-sm-12">
                                <a class="btn btn-block" href={content::EMAIL_URI}>{"Email"}</a>
                            </div>
                            <div class="col col-6 col-sm-12">
                                <a
                                    class="btn btn-outline btn-block"
                                    href={content::LINKEDIN_URI}
                                    target="_blank"
                                    rel="noreferrer"
                                >
                                    {"LinkedIn"}
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="container-xl footer1">
                    <div class="social-icons d-inline-flex">
                        { for content::SOCIAL_LINKS.iter().map(|(class, label, href)| html! {
                            <a
                                href={*href}
                                target="_blank"
                                rel="noopener noreferrer"
                                class={*class}
                                aria-label={*label}
                            >
                                {*label}
                            </a>
                        }) }
                    </div>
                    <input
                        type="color"
                        value={state.accent_color().to_string()}
                        oninput={on_accent}
                        aria-label="Choose accent color"
                    />
                </div>
            </footer>

            if state.palette_open() {
                <CommandPalette on_key={on_palette_key} />
            }
        </div>
    }
}

pub fn run() {
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(max_log_level())
            .build(),
    );

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
