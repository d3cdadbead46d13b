use url::Url;

use crate::{
    cache::Store,
    calendar::{cache_key, course_url, CalendarType},
    config::Config,
    fetch::{self, Credentials},
    parse::{CourseRecord, EventRecord, MealBalanceRecord},
    Result,
};

/// Looks up courses, events and meal plan balances. Each call issues at
/// most one request and waits for it.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
    store: Store,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        let store = config.cache.as_ref().map_or_else(Store::default, Store::local);
        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: Store) -> Result<Self> {
        Ok(Self {
            http: fetch::make_client()?,
            config,
            store,
        })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches and parses a course calendar entry, e.g. `(2011, "cis1910", Undergraduate)`.
    /// With `use_cache` a previously stored record is returned without a request.
    pub async fn course(
        &mut self,
        year: i32,
        code: &str,
        calendar: CalendarType,
        use_cache: bool,
    ) -> Result<CourseRecord> {
        let key = cache_key(year, code, calendar);
        if use_cache {
            if let Some(record) = self.store.get(&key).await? {
                log::debug!("course {key} served from the store");
                return Ok(record);
            }
        }

        let url = course_url(&self.config.calendar_base, year, code, calendar)?;
        let source = fetch::fetch_source(&self.http, &url).await?;
        let record = CourseRecord::parse(&source)?;
        self.store.save(&key, &record).await?;
        Ok(record)
    }

    pub async fn event(&self, url: &str) -> Result<EventRecord> {
        let url: Url = url.trim().parse()?;
        let source = fetch::fetch_event_source(&self.http, &url).await?;
        Ok(EventRecord::parse(&source)?)
    }

    pub async fn balance(&self, credentials: &Credentials) -> Result<MealBalanceRecord> {
        let source =
            fetch::fetch_balance_source(&self.http, &self.config.meal_plan_login, credentials)
                .await?;
        Ok(MealBalanceRecord::parse(&source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::current_year;
    use crate::config::DEFAULT_MEAL_PLAN_LOGIN;
    use crate::Error;
    use std::fs;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn example(p: &str) -> String {
        fs::read_to_string(format!("./src/parse/html_examples/{p}")).unwrap()
    }

    fn client(server: &MockServer) -> Client {
        let login = format!("{}/accountservices/chooseaccount.cfm?action=balance", server.uri());
        Client::new(Config::new(&server.uri(), &login, None).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_course_uses_store() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(
                "/registrar/calendars/undergraduate/current/courses/cis1910.shtml",
            ))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(example("course/cis1910.html")),
            )
            .expect(2)
            .mount(&server)
            .await;
        let mut client = client(&server);
        let year = current_year();

        let first = client
            .course(year, "CIS1910", CalendarType::Undergraduate, false)
            .await
            .unwrap();
        assert_eq!(first.title(), "Programming I");
        assert_eq!(first.number(), "1910");

        // cached: no request
        let cached = client
            .course(year, "CIS1910", CalendarType::Undergraduate, true)
            .await
            .unwrap();
        assert_eq!(cached, first);

        // fresh: request again
        let fresh = client
            .course(year, "CIS1910", CalendarType::Undergraduate, false)
            .await
            .unwrap();
        assert_eq!(fresh, first);
    }

    #[tokio::test]
    async fn test_course_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/registrar/calendars/graduate/2001-2002/courses/zzz0000.shtml"))
            .respond_with(ResponseTemplate::new(301).insert_header(
                "Location",
                format!("{}/registrar/calendars/graduate/", server.uri()).as_str(),
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/registrar/calendars/graduate/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("calendar index"))
            .mount(&server)
            .await;
        let mut client = client(&server);
        let err = client
            .course(2001, "ZZZ0000", CalendarType::Graduate, true)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)), "{err}");
    }

    #[tokio::test]
    async fn test_event() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/studentaffairs/events/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(example("event/workshop.html")),
            )
            .mount(&server)
            .await;
        let client = client(&server);
        let event = client
            .event(&format!("{}/studentaffairs/events/?event_id=1187\n", server.uri()))
            .await
            .unwrap();
        assert_eq!(event.organization(), "Career Services");
        assert_eq!(event.get("location"), Some("Room (204) Main Hall"));
    }

    #[tokio::test]
    async fn test_event_bad_url() {
        let server = MockServer::start().await;
        let client = client(&server);
        assert!(matches!(
            client.event("not a url").await,
            Err(Error::Url(_))
        ));
    }

    #[tokio::test]
    async fn test_balance() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/accountservices/chooseaccount.cfm"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(example("meal_plan/balance.html")),
            )
            .mount(&server)
            .await;
        let client = client(&server);
        let credentials = Credentials {
            username: "jdoe".into(),
            password: "secret".into(),
        };
        let balance = client.balance(&credentials).await.unwrap();
        assert_eq!(balance.kind(), "Board");
        assert_eq!(balance.balance(), "123.45");
    }

    #[test]
    fn test_default_config_client() {
        let config = Config::new("https://www.uoguelph.ca", DEFAULT_MEAL_PLAN_LOGIN, None).unwrap();
        let client = Client::new(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
    }
}
