use super::*;

impl<'a> CrawlRepo for DbConnection<'a> {
    fn create_crawl(&self, crawl: &Crawl) -> Result<()> {
        let mut crawls = self.store.crawls.write();
        if crawls.contains_key(&crawl.id) {
            return Err(repo::Error::AlreadyExists);
        }
        crawls.insert(crawl.id.clone(), crawl.clone());
        Ok(())
    }

    fn get_crawl(&self, id: &Id) -> Result<Crawl> {
        self.store
            .crawls
            .read()
            .get(id)
            .cloned()
            .ok_or(repo::Error::NotFound)
    }

    fn try_get_crawl(&self, id: &Id) -> Result<Option<Crawl>> {
        Ok(self.store.crawls.read().get(id).cloned())
    }

    fn count_crawls(&self) -> Result<usize> {
        Ok(self.store.crawls.read().len())
    }

    fn update_crawl_details(&self, id: &Id, details: &CrawlDetails) -> Result<()> {
        let mut crawls = self.store.crawls.write();
        let crawl = crawls.get_mut(id).ok_or(repo::Error::NotFound)?;
        let CrawlDetails {
            name,
            description,
            period,
        } = details;
        crawl.name = name.clone();
        crawl.description = description.clone();
        crawl.period = *period;
        Ok(())
    }

    fn update_crawl_publication(&self, id: &Id, published: Option<Timestamp>) -> Result<()> {
        let mut crawls = self.store.crawls.write();
        let crawl = crawls.get_mut(id).ok_or(repo::Error::NotFound)?;
        crawl.published = published;
        Ok(())
    }

    fn update_crawl_venues(&self, id: &Id, venues: &[Id]) -> Result<()> {
        let mut crawls = self.store.crawls.write();
        let crawl = crawls.get_mut(id).ok_or(repo::Error::NotFound)?;
        crawl.set_venues(venues.to_vec());
        Ok(())
    }

    fn update_crawl_location(&self, id: &Id, location: &HomeLocation) -> Result<()> {
        if !location.polygon.is_valid() {
            return Err(repo::Error::InvalidGeometry);
        }
        let mut crawls = self.store.crawls.write();
        let crawl = crawls.get_mut(id).ok_or(repo::Error::NotFound)?;
        crawl.set_location(location.clone());
        Ok(())
    }

    fn update_crawl_search_locations(&self, id: &Id, cache: &SearchLocations) -> Result<()> {
        let mut crawls = self.store.crawls.write();
        let crawl = crawls.get_mut(id).ok_or(repo::Error::NotFound)?;
        crawl.cache_search_locations(cache.clone());
        Ok(())
    }

    fn update_crawl_attendance(&self, id: &Id, transition: &AttendanceTransition) -> Result<()> {
        // Applied under the collection lock, so the whole
        // transition becomes visible to readers at once.
        let mut crawls = self.store.crawls.write();
        let crawl = crawls.get_mut(id).ok_or(repo::Error::NotFound)?;
        crawl.apply_attendance(transition);
        Ok(())
    }

    fn crawls_intersecting(&self, pos: MapPoint, active_at: Timestamp) -> Result<Vec<Crawl>> {
        let crawls = self.store.crawls.read();
        Ok(crawls
            .values()
            .filter(|crawl| crawl.period.contains(active_at))
            .filter(|crawl| {
                crawl
                    .location
                    .as_ref()
                    .map(|location| spatial::polygon_contains(&location.polygon, pos))
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }
}
