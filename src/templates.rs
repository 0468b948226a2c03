use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    forms::{AddForm, AddFormErrors, UpdateForm, UpdateFormErrors},
    models::RankedMovie,
    tmdb::{self, MovieCandidate},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page(movies: &[RankedMovie]) -> String {
    page(
        "My Movie Collection",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Movie Collection" }
                            p class="mt-2 text-gray-600" { "Every film I have rated, best first." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing here yet. Add your first movie." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for entry in movies {
                                (movie_card(entry))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(form: &AddForm, errors: &AddFormErrors) -> String {
    page(
        "Add a movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add a movie" }
                        p class="mt-2 text-gray-600" { "Search the movie database by title." }

                        form class="mt-8 space-y-6" method="post" action="/add" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="title" { "Movie Title" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="title" id="title" value=(form.title);
                                (field_error(errors.title))
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Search" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to the collection" }
                    }
                }
            }
        },
    )
}

pub fn select_page(query: &str, candidates: &[MovieCandidate]) -> String {
    page(
        "Select a movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    h1 class="text-3xl font-bold text-gray-900" { "Select a movie" }
                    p class="mt-2 text-gray-600" { "Results for “" (query) "”." }

                    @if candidates.is_empty() {
                        div class="mt-8 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies matched your search." }
                        }
                    } @else {
                        ul class="mt-8 space-y-3" {
                            @for candidate in candidates {
                                (candidate_row(candidate))
                            }
                        }
                    }

                    a class="mt-8 inline-block text-sm text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model, form: &UpdateForm, errors: &UpdateFormErrors) -> String {
    page(
        "Rate movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        div class="flex items-center gap-4" {
                            (poster(movie.img_url.as_deref(), &movie.title, "h-24 w-16"))
                            div {
                                h1 class="text-2xl font-bold text-gray-900" {
                                    (movie.title)
                                    span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                                }
                                p class="mt-1 text-sm text-gray-500 line-clamp-2" { (movie.description) }
                            }
                        }

                        form class="mt-8 space-y-6" method="post" action=(format!("/edit?id={}", movie.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Your Rating out of 10 e.g. 7.5" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="rating" id="rating" value=(form.rating);
                                (field_error(errors.rating))
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Your Review" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="review" id="review" value=(form.review);
                                (field_error(errors.review))
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Save" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to the collection" }
                    }
                }
            }
        },
    )
}

pub fn not_found_page() -> String {
    page(
        "Not found",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "404" }
                        p class="mt-4 text-gray-700" { "That movie is not in the catalog." }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn movie_card(entry: &RankedMovie) -> Markup {
    let movie = &entry.movie;

    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex gap-5" {
                (poster(movie.img_url.as_deref(), &movie.title, "h-36 w-24"))
                div class="flex-1" {
                    div class="flex items-baseline gap-3" {
                        span class="text-2xl font-bold text-gray-300" { "#" (entry.rank) }
                        h2 class="text-xl font-semibold text-gray-900" {
                            (movie.title)
                            span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                        }
                    }

                    p class="mt-1 text-sm font-medium text-gray-700" {
                        @if let Some(rating) = movie.rating {
                            (format!("{rating:.1}")) " / 10"
                        } @else {
                            "Not rated yet"
                        }
                    }

                    @if let Some(review) = &movie.review {
                        p class="mt-2 italic text-gray-600" { "“" (review) "”" }
                    }

                    p class="mt-2 text-sm text-gray-500" { (movie.description) }

                    div class="mt-4 flex gap-4 text-sm" {
                        a class="text-blue-600 hover:text-blue-800" href=(format!("/edit?id={}", movie.id)) { "Edit" }
                        a class="text-red-600 hover:text-red-800" href=(format!("/delete?id={}", movie.id)) { "Delete" }
                    }
                }
            }
        }
    }
}

fn candidate_row(candidate: &MovieCandidate) -> Markup {
    let poster_url = candidate.poster_path.as_deref().map(tmdb::poster_url);
    let release_date = candidate.release_date.as_deref().filter(|date| !date.is_empty());

    html! {
        li {
            a class="flex items-center gap-4 bg-white shadow rounded-lg p-4 hover:bg-gray-50" href=(format!("/find?id={}", candidate.id)) {
                (poster(poster_url.as_deref(), &candidate.title, "h-16 w-11"))
                div {
                    p class="font-semibold text-gray-900" {
                        (candidate.title)
                        @if let Some(date) = release_date {
                            span class="ml-2 font-normal text-gray-500" { "(" (date) ")" }
                        }
                    }
                    @if !candidate.overview.is_empty() {
                        p class="mt-1 text-sm text-gray-500 line-clamp-2" { (candidate.overview) }
                    }
                }
            }
        }
    }
}

fn poster(url: Option<&str>, alt: &str, size: &str) -> Markup {
    html! {
        @if let Some(url) = url {
            img class=(format!("{size} rounded object-cover")) src=(url) alt=(alt);
        } @else {
            div class=(format!("{size} rounded bg-gray-200")) {}
        }
    }
}

fn field_error(message: Option<&'static str>) -> Markup {
    html! {
        @if let Some(message) = message {
            p class="mt-2 text-sm text-red-600" { (message) }
        }
    }
}
