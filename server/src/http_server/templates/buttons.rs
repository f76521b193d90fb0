use maud::{html, Markup, Render};

pub struct LinkButton {
    inner: Markup,
    href: String,
    button_type: ButtonType,
}

impl LinkButton {
    pub fn primary(inner: Markup, href: impl Into<String>) -> Self {
        Self {
            inner,
            href: href.into(),
            button_type: ButtonType::Primary,
        }
    }

    pub fn secondary(inner: Markup, href: impl Into<String>) -> Self {
        Self {
            inner,
            href: href.into(),
            button_type: ButtonType::Secondary,
        }
    }
}

pub enum ButtonType {
    Primary,
    Secondary,
}

impl ButtonType {
    fn classes(&self) -> &str {
        match &self {
            ButtonType::Primary => "bg-blue-600 text-white",
            ButtonType::Secondary => "bg-white border",
        }
    }
}

impl Render for LinkButton {
    fn render(&self) -> Markup {
        let classes = [
            "px-4",
            "py-2",
            "rounded",
            "font-semibold",
            "inline-block",
            self.button_type.classes(),
        ]
        .join(" ");

        html! {
          a href=(self.href) class=(classes) {
            (self.inner)
          }
        }
    }
}
