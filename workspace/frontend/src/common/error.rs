use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Failure of a request, as opposed to a section reporting its own problem
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{"Could not reach the dashboard service"}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="btn btn-primary btn-sm"
                        onclick={Callback::from(move |_| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        <i class="fas fa-redo"></i>
                        {" Try Again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionNoticeProps {
    pub message: String,
    /// Errors are red, warnings amber
    #[prop_or_default]
    pub is_error: bool,
}

/// Inline warning or error shown in place of a section's content
#[function_component(SectionNotice)]
pub fn section_notice(props: &SectionNoticeProps) -> Html {
    let (class, icon) = if props.is_error {
        ("alert alert-error", "fas fa-times-circle")
    } else {
        ("alert alert-warning", "fas fa-exclamation-triangle")
    };

    html! {
        <div class={class}>
            <i class={icon}></i>
            <span>{&props.message}</span>
        </div>
    }
}
