pub mod shared {
    pub mod infrastructure {
        pub mod key_value_store;
    }
}

pub mod modules {
    pub mod ticket_events {
        pub mod core {
            pub mod event;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod upsert_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod calendar_feed {
                pub mod encode;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod event_store;
            }
        }
    }
}

pub mod shell;
