use yew::prelude::*;

#[function_component(LinkedInIcon)]
pub fn linkedin_icon() -> Html {
    html! {
        <svg aria-hidden="true" width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <rect width="24" height="24" rx="4" fill="currentColor" opacity="0.15" />
            <path
                d="M8.535 17.25H6.045V9.705h2.49V17.25Zm-1.245-8.625c-.81 0-1.44-.63-1.44-1.41 0-.765.63-1.395 1.44-1.395.795 0 1.425.63 1.44 1.395 0 .78-.645 1.41-1.44 1.41Zm11.16 8.625h-2.49v-3.93c0-.99-.36-1.665-1.26-1.665-.69 0-1.095.465-1.275.915-.06.15-.075.36-.075.57v4.11h-2.49V9.705h2.49v1.035c.36-.555.915-1.095 2.07-1.095 1.5 0 3.03.99 3.03 3.15v4.455Z"
                fill="currentColor"
            />
        </svg>
    }
}

#[function_component(GitHubIcon)]
pub fn github_icon() -> Html {
    html! {
        <svg aria-hidden="true" width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path
                d="M12 2C6.476 2 2 6.588 2 12.223c0 4.502 2.865 8.315 6.839 9.661.5.1.682-.222.682-.495 0-.244-.009-.889-.014-1.746-2.782.615-3.369-1.37-3.369-1.37-.455-1.177-1.11-1.49-1.11-1.49-.908-.64.069-.627.069-.627 1.003.073 1.531 1.06 1.531 1.06.892 1.566 2.341 1.114 2.91.852.091-.664.35-1.114.637-1.37-2.22-.258-4.555-1.138-4.555-5.07 0-1.12.387-2.036 1.025-2.753-.103-.259-.445-1.302.098-2.714 0 0 .84-.273 2.75 1.051A9.354 9.354 0 0 1 12 7.46a9.35 9.35 0 0 1 2.502.347c1.91-1.324 2.748-1.051 2.748-1.051.545 1.412.203 2.455.1 2.714.64.717 1.024 1.633 1.024 2.753 0 3.943-2.341 4.807-4.568 5.058.359.319.678.95.678 1.916 0 1.383-.012 2.497-.012 2.835 0 .275.18.598.688.494A10.036 10.036 0 0 0 22 12.223C22 6.588 17.522 2 12 2Z"
                fill="currentColor"
            />
        </svg>
    }
}

#[function_component(ScrollWheelIcon)]
pub fn scroll_wheel_icon() -> Html {
    html! {
        <svg aria-hidden="true" width="22" height="22" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <rect x="7" y="2" width="10" height="20" rx="5" stroke="currentColor" stroke-width="1.5" fill="rgba(148, 163, 184, 0.08)" />
            <rect x="11" y="6" width="2" height="4" rx="1" fill="currentColor" />
            <path d="M12 14.5v4" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" />
            <path d="M10 18.5s1 1 2 1 2-1 2-1" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct OpenForWorkRingProps {
    pub path_id: AttrValue,
}

#[function_component(OpenForWorkRing)]
pub fn open_for_work_ring(props: &OpenForWorkRingProps) -> Html {
    let href = format!("#{}", props.path_id);

    html! {
        <>
            <svg class="avatar__ring" viewBox="0 0 120 120" aria-hidden="true">
                <defs>
                    <path id={props.path_id.clone()} d="M60 60 m0 -54 a54 54 0 1 1 0 108 a54 54 0 1 1 0 -108" />
                </defs>
                <circle class="avatar__ring-track" cx="60" cy="60" r="54" />
                <text class="avatar__ring-text">
                    <textPath href={href} startOffset="50%" text-anchor="middle">
                        {"OPEN FOR WORK • OPEN FOR WORK •"}
                    </textPath>
                </text>
            </svg>
            <span class="avatar__sparkles" aria-hidden="true">
                <span class="avatar__sparkle avatar__sparkle--one" />
                <span class="avatar__sparkle avatar__sparkle--two" />
                <span class="avatar__sparkle avatar__sparkle--three" />
            </span>
        </>
    }
}
