use std::{convert::Infallible, str::FromStr};

macro_rules! icons {
    ( $( $variant:ident => $key:literal, $class:literal; )* ) => {
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub enum Icon {
            $( $variant, )*
            /// Key that is not in the registry, rendered as an empty slot
            Unknown(String),
        }

        impl Icon {
            /// Every key the registry knows about
            pub const KEYS: &'static [&'static str] = &[ $( $key, )* ];

            pub fn key(&self) -> &str {
                match self {
                    $( Icon::$variant => $key, )*
                    Icon::Unknown(key) => key,
                }
            }

            /// CSS classes drawing the icon, `None` for unknown keys
            pub fn class(&self) -> Option<&'static str> {
                match self {
                    $( Icon::$variant => Some($class), )*
                    Icon::Unknown(_) => None,
                }
            }
        }

        impl FromStr for Icon {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Icon, Infallible> {
                Ok(match s {
                    $( $key => Icon::$variant, )*
                    _ => Icon::Unknown(String::from(s)),
                })
            }
        }
    };
}

icons! {
    Github => "github", "devicon-github-original";
    LinkedIn => "linkedin", "devicon-linkedin-plain";
    GooglePlay => "googleplay", "bi bi-google-play";
    Wordpress => "wordpress", "devicon-wordpress-plain";
    Laravel => "laravel", "devicon-laravel-plain";
    Heroku => "heroku", "devicon-heroku-original";
    Php => "php", "devicon-php-plain";
    Zeit => "zeit", "devicon-vercel-original";
    React => "react", "devicon-react-original";
    Gatsby => "gatsby", "devicon-gatsby-plain";
    ItchIo => "itchio", "bi bi-controller";
    Aws => "aws", "devicon-amazonwebservices-plain-wordmark";
    Link => "link", "bi bi-link-45deg";
    GraphQl => "graphql", "devicon-graphql-plain";
    Django => "django", "devicon-django-plain";
    Slack => "slack", "devicon-slack-plain";
    Vue => "vue", "devicon-vuejs-plain";
    Nuxt => "nuxt", "devicon-nuxtjs-plain";
    Node => "node", "devicon-nodejs-plain";
    Postgres => "postgres", "devicon-postgresql-plain";
    Python => "python", "devicon-python-plain";
    Javascript => "javascript", "devicon-javascript-plain";
}

impl Icon {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Icon::Unknown(_))
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct IconDescriptor {
    /// Registry key
    pub icon: String,
    pub tooltip: String,
    pub link: String,
}

/// One entry of an icon tray, ready to be turned into markup
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedIcon {
    /// Position in the input list, also used as the element key
    pub index: usize,
    pub icon: Icon,
    pub href: String,
    pub label: String,
}

impl RenderedIcon {
    /// Project descriptors into rendered icons, preserving order and
    /// duplicates
    pub fn project(descriptors: &[IconDescriptor]) -> Vec<RenderedIcon> {
        descriptors
            .iter()
            .enumerate()
            .map(|(index, d)| {
                let icon = Icon::from_str(&d.icon).unwrap_or_else(|never| match never {});
                if icon.is_unknown() {
                    tracing::warn!(key = %d.icon, "icon key is not in the registry");
                }
                RenderedIcon {
                    index,
                    icon,
                    href: d.link.clone(),
                    label: d.tooltip.clone(),
                }
            })
            .collect()
    }
}
