use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::{prelude::*, ChromiumLikeCapabilities};

use crate::{configuration::BrowserSettings, error::ScrapeError};

use super::{Element, Page};

/// A Chrome session driven over WebDriver.
pub struct Droid {
    pub driver: WebDriver,
    poll_interval: Duration,
}

impl Droid {
    pub async fn launch(
        settings: &BrowserSettings,
        poll_interval: Duration,
    ) -> Result<Self, ScrapeError> {
        let mut caps = DesiredCapabilities::chrome();
        if settings.headless {
            caps.set_headless()?;
        }
        caps.add_arg(&format!(
            "--window-size={},{}",
            settings.window_width, settings.window_height
        ))?;

        log::info!("Connecting to webdriver at {}", settings.webdriver_url);
        let driver = WebDriver::new(settings.webdriver_url.as_str(), caps).await?;
        if !settings.headless {
            driver.maximize_window().await?;
        }

        Ok(Droid {
            driver,
            poll_interval,
        })
    }

    /// The session's window. WebDriver sessions have a single page.
    pub fn new_page(&self) -> WebPage {
        WebPage {
            driver: self.driver.clone(),
            poll_interval: self.poll_interval,
        }
    }

    pub async fn close(self) -> Result<(), ScrapeError> {
        log::info!("Closing browser session");
        self.driver.quit().await?;
        Ok(())
    }
}

pub struct WebPage {
    driver: WebDriver,
    poll_interval: Duration,
}

#[async_trait]
impl Page for WebPage {
    type Element = WebElement;

    async fn goto(&self, url: &str) -> Result<(), ScrapeError> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<(), ScrapeError> {
        let present = self
            .driver
            .query(By::Css(selector))
            .wait(timeout, self.poll_interval)
            .exists()
            .await?;

        match present {
            true => Ok(()),
            false => Err(ScrapeError::timeout(selector, timeout)),
        }
    }

    async fn query_all(&self, selector: &str) -> Result<Vec<WebElement>, ScrapeError> {
        Ok(self.driver.find_all(By::Css(selector)).await?)
    }
}

#[async_trait]
impl Element for WebElement {
    async fn query_all(&self, selector: &str) -> Result<Vec<Self>, ScrapeError> {
        Ok(WebElement::find_all(self, By::Css(selector)).await?)
    }

    async fn text(&self) -> Result<String, ScrapeError> {
        Ok(WebElement::text(self).await?)
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>, ScrapeError> {
        Ok(self.attr(name).await?)
    }

    async fn activate(&self) -> Result<(), ScrapeError> {
        self.click().await?;
        Ok(())
    }

    async fn fill(&self, text: &str) -> Result<(), ScrapeError> {
        self.clear().await?;
        self.send_keys(text).await?;
        Ok(())
    }
}
