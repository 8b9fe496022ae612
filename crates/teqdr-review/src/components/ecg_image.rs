//! ECG trace image with a placeholder when the source cannot be loaded.

use dioxus::prelude::*;
use teqdr_ui::resolve_image_src;

#[component]
pub fn EcgImage(
    image: ReadSignal<String>,
    alt: String,
    #[props(default = false)]
    thumbnail: bool,
) -> Element {
    let src = use_memo(move || resolve_image_src(&image.read()));
    let path = image();
    let class = if thumbnail { "ecg-image ecg-image-thumb" } else { "ecg-image" };

    rsx! {
        if let Some(url) = src() {
            img {
                class: "{class}",
                src: "{url}",
                alt: "{alt}",
            }
        } else {
            div {
                class: "{class} ecg-image-placeholder",
                title: "{path}",
                "Image unavailable"
            }
        }
    }
}
