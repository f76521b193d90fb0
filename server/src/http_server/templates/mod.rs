use maud::{html, Markup};

pub fn head() -> Markup {
    html! {
      head {
        title { "Posts Admin" }
        link rel="stylesheet" href="/styles/tailwind.css" {}

        meta name="viewport" content="width=device-width, initial-scale=1";
      }
    }
}

pub fn header() -> Markup {
    html! {
      div class="flex items-center justify-between py-8" {
        a href="/admin/posts" class="text-2xl font-bold" { "Posts Admin" }

        nav {
          ul class="flex flex-row items-center" {
            li class="mx-4" {
              a href="/admin/posts" { "Posts" }
            }
          }
        }
      }
    }
}

pub fn base(inner: Markup) -> Markup {
    html! {
      (head())

      body class="bg-gray-50 text-gray-900 px-4 max-w-5xl m-auto font-sans" {
        (header())

        (inner)
      }
    }
}

pub fn base_constrained(inner: Markup) -> Markup {
    base(html! {
      div class="max-w-4xl m-auto pb-16" {
        (inner)
      }
    })
}

pub(crate) mod buttons;
