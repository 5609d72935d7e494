//! The stylesheet accompanying a generated section.

const ACCENT: &str = "{accent}";

const TEMPLATE: &str = "\
/* Certifications Section Styles */
.certifications-section {
  max-width: 1200px;
  margin: 40px auto;
  padding: 20px;
}

.certifications-section h2 {
  font-size: 32px;
  margin-bottom: 30px;
  color: {accent};
}

.certifications-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 24px;
}

.cert-card {
  background: #fff;
  border: 1px solid #e0e0e0;
  border-radius: 12px;
  padding: 24px;
  box-shadow: 0 2px 8px rgba(0,0,0,0.05);
  transition: transform 0.2s, box-shadow 0.2s;
}

.cert-card:hover {
  transform: translateY(-4px);
  box-shadow: 0 4px 16px rgba(0,0,0,0.1);
}

.cert-badge {
  width: 80px;
  height: 80px;
  margin-bottom: 16px;
}

.cert-badge img {
  width: 100%;
  height: 100%;
  object-fit: contain;
}

.cert-card h3 {
  font-size: 18px;
  margin-bottom: 12px;
  color: #333;
}

.cert-card p {
  font-size: 14px;
  color: #666;
  line-height: 1.6;
  margin-bottom: 16px;
}

.cert-meta {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 16px;
  font-size: 12px;
}

.cert-date {
  color: #999;
}

.cert-status {
  padding: 4px 12px;
  border-radius: 20px;
  font-weight: 500;
}

.cert-status.active {
  background: #dcfce7;
  color: #16a34a;
}

.cert-status.in-progress {
  background: #fef3c7;
  color: #d97706;
}

.cert-status.expired {
  background: #fee2e2;
  color: #dc2626;
}

.cert-link {
  display: inline-block;
  padding: 8px 16px;
  background: {accent};
  color: #fff;
  text-decoration: none;
  border-radius: 6px;
  font-size: 14px;
  font-weight: 500;
  transition: opacity 0.2s;
}

.cert-link:hover {
  opacity: 0.9;
}

@media (max-width: 768px) {
  .certifications-grid {
    grid-template-columns: 1fr;
  }
}";

/// The fixed stylesheet with `accent` (a CSS colour) filled in.
pub(crate) fn stylesheet(accent: &str) -> String { TEMPLATE.replace(ACCENT, accent) }
